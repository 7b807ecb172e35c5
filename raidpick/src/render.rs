use std::fmt::Write as _;

use raidpick_core::{Channel, LiveChannel, Team};
use time::OffsetDateTime;

use crate::FormatTime as _;

/// `name` [viewers]: game for 2 hours, 5 minutes
pub fn live_line(live: &LiveChannel, now: OffsetDateTime) -> String {
    format!(
        "`{name}` [{viewers}]: {game} for {uptime}",
        name = live.name(),
        viewers = live.viewers,
        game = live.game,
        uptime = live.uptime(now).as_readable_time(),
    )
}

fn live_list(out: &mut String, live: &[LiveChannel], now: OffsetDateTime, empty: &str) {
    if live.is_empty() {
        let _ = writeln!(out, "{empty}");
        return;
    }
    for channel in live {
        let _ = writeln!(out, "{}", live_line(channel, now));
    }
}

pub fn followed(channel: &Channel, live: &[LiveChannel], now: OffsetDateTime) -> String {
    let mut out = format!("{}'S FOLLOWED CHANNELS\n\n", channel.name.to_uppercase());
    live_list(&mut out, live, now, "No followed channels online right now.");
    out
}

pub fn team(team: &Team, now: OffsetDateTime) -> String {
    let mut out = format!("{}\n\n", team.name.to_uppercase());
    live_list(&mut out, &team.live, now, "No team members online right now.");
    out
}

/// The lists that can be fetched for `channel`
pub fn suggestions(channel: &Channel, teams: &[Team]) -> String {
    let mut out = format!("Raid suggestions for {}:\n", channel.name);
    out.push_str("I'll help you choose someone to raid!\n");

    if teams.is_empty() {
        out.push_str(
            "At the moment, you aren't a member of any teams, \
             so all I can show you is who you follow.\n",
        );
    } else {
        out.push_str(
            "I can show you a list of people online that you follow, \
             or a list of people from one of your stream teams.\n",
        );
    }

    out.push_str("\nWhich list would you like me to fetch?\n");
    let _ = writeln!(
        out,
        "  raidpick followed --id {:<12} {}'s followed",
        channel.id, channel.name
    );
    for team in teams {
        let _ = writeln!(out, "  raidpick team {:<17} {}", team.id, team.name);
    }
    out
}
