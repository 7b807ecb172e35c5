pub mod args;
pub mod outcome;
pub mod render;

mod format;
pub use format::FormatTime;

use raidpick_core::{Aggregator, CancellationToken, ChannelId, Directory, Error, TeamId};

use crate::args::Command;

/// A [`Command`] whose arguments have been checked
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Suggest { name: String, members: bool },
    FollowedByName(String),
    FollowedById(ChannelId),
    Team(TeamId),
}

impl TryFrom<Command> for Request {
    type Error = anyhow::Error;

    fn try_from(command: Command) -> anyhow::Result<Self> {
        fn required(arg: Option<String>, what: &str) -> anyhow::Result<String> {
            match arg.filter(|s| !s.trim().is_empty()) {
                Some(arg) => Ok(arg),
                None => anyhow::bail!("{what} is required"),
            }
        }

        Ok(match command {
            Command::Suggest(args) => Self::Suggest {
                name: required(args.name, "a channel name")?,
                members: args.members,
            },
            Command::Followed(args) if args.id => {
                Self::FollowedById(required(args.channel, "a channel id")?.into())
            }
            Command::Followed(args) => Self::FollowedByName(required(args.channel, "a channel name")?),
            Command::Team(args) => Self::Team(required(args.team, "a team id")?.into()),
        })
    }
}

/// Runs `request`, producing the text to print
pub async fn run<D: Directory>(
    agg: &Aggregator<D>,
    request: Request,
    token: &CancellationToken,
) -> Result<String, Error> {
    let now = time::OffsetDateTime::now_utc();

    match request {
        Request::Suggest { name, members } => {
            let channel = agg.find_channel_by_name(&name, token).await?;
            log::info!("finding raid suggestions for {} ({})", channel.name, channel.id);

            let teams = agg.teams_of(&channel.id, members, token).await?;
            let mut out = render::suggestions(&channel, &teams);
            if members {
                for team in &teams {
                    out.push('\n');
                    out.push_str(&render::team(team, now));
                }
            }
            Ok(out)
        }

        Request::FollowedByName(name) => {
            let channel = agg.find_channel_by_name(&name, token).await?;
            followed(agg, channel, now, token).await
        }

        Request::FollowedById(id) => {
            let channel = agg.channel_by_id(&id, token).await?;
            followed(agg, channel, now, token).await
        }

        Request::Team(id) => {
            let team = agg.live_members_of(&id, token).await?;
            log::info!("{} members of {} are live", team.live.len(), team.name);
            Ok(render::team(&team, now))
        }
    }
}

async fn followed<D: Directory>(
    agg: &Aggregator<D>,
    channel: raidpick_core::Channel,
    now: time::OffsetDateTime,
    token: &CancellationToken,
) -> Result<String, Error> {
    let live = agg.followed_live_channels(&channel.id, token).await?;
    log::info!("{} followed channels of {} are live", live.len(), channel.name);
    Ok(render::followed(&channel, &live, now))
}
