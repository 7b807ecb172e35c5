use anyhow::Context;

pub type Assign<T> = fn(&mut T, String);

/// Builds `T` from its default by assigning every `keys` entry from the environment.
///
/// Every key is required, the first missing one is reported by name.
pub fn load_from_env<T: Default + std::fmt::Debug>(keys: &[(&str, Assign<T>)]) -> anyhow::Result<T> {
    load_from_env_with(keys, &[])
}

/// Like [`load_from_env`], but `optional` keys are only assigned when they are set.
pub fn load_from_env_with<T: Default + std::fmt::Debug>(
    required: &[(&str, Assign<T>)],
    optional: &[(&str, Assign<T>)],
) -> anyhow::Result<T> {
    let get = |key| {
        log::trace!("looking up {key}");
        std::env::var(key).with_context(|| anyhow::anyhow!("key '{key}' was not found"))
    };

    log::trace!("loading env vars for: {}", std::any::type_name::<T>());

    let mut this = required
        .iter()
        .try_fold(T::default(), |mut this, (key, func)| {
            func(&mut this, get(key)?);
            anyhow::Ok(this)
        })?;

    for (key, func) in optional {
        match std::env::var(key) {
            Ok(val) => func(&mut this, val),
            Err(_) => log::trace!("optional key {key} is not set"),
        }
    }

    log::debug!("created: {:?}", this);
    Ok(this)
}

pub trait LoadFromEnv
where
    Self: Sized,
{
    fn load_from_env() -> anyhow::Result<Self>;
}
