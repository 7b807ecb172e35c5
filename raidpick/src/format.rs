pub trait FormatTime {
    /// The two most significant units, e.g. `2 hours, 5 minutes`
    fn as_readable_time(&self) -> String;
}

impl FormatTime for time::Duration {
    fn as_readable_time(&self) -> String {
        const UNITS: [(i64, &str); 4] = [(86400, "day"), (3600, "hour"), (60, "minute"), (1, "second")];

        let mut secs = self.whole_seconds().max(0);
        let parts = UNITS
            .into_iter()
            .filter_map(|(size, name)| {
                let n = secs / size;
                secs %= size;
                (n > 0).then(|| format!("{n} {name}{}", if n == 1 { "" } else { "s" }))
            })
            .take(2)
            .collect::<Vec<_>>();

        if parts.is_empty() {
            return String::from("0 seconds");
        }
        parts.join(", ")
    }
}
