use std::collections::HashSet;

use tokio_util::sync::CancellationToken;

use crate::{
    cancel::guarded, live::unique, Aggregator, ChannelId, Directory, Error, Missing, Result, Team,
    TeamId, MAX_BATCH_SIZE,
};

impl<D: Directory> Aggregator<D> {
    /// The teams `broadcaster` belongs to, sorted by name.
    ///
    /// Rosters cost one extra request per team, so they (and the live members)
    /// are only resolved when `with_members` is set.
    pub async fn teams_of(
        &self,
        broadcaster: &ChannelId,
        with_members: bool,
        token: &CancellationToken,
    ) -> Result<Vec<Team>> {
        let memberships = guarded(token, self.directory.get_team_memberships(broadcaster)).await?;

        let mut seen = HashSet::new();
        let mut teams = memberships
            .into_iter()
            .filter(|team| seen.insert(team.id.clone()))
            .map(Team::from)
            .collect::<Vec<_>>();
        teams.sort_by_cached_key(|team| (team.name.to_lowercase(), team.name.clone()));

        log::debug!("{broadcaster} is a member of {} teams", teams.len());

        if with_members {
            for team in &mut teams {
                let resolved = self.live_members_of(&team.id, token).await?;
                team.members = resolved.members;
                team.live = resolved.live;
            }
        }

        Ok(teams)
    }

    /// Resolves the roster of `team` and which of its members are live.
    ///
    /// Only the first [`MAX_BATCH_SIZE`] members are checked for liveness,
    /// larger rosters are not paged through.
    pub async fn live_members_of(&self, team: &TeamId, token: &CancellationToken) -> Result<Team> {
        let roster = guarded(token, self.directory.get_team_roster(team))
            .await?
            .ok_or_else(|| {
                log::debug!("no team found for {team}");
                Error::NotFound(Missing::Team(team.clone()))
            })?;

        let members = unique(roster.members);
        if members.len() > MAX_BATCH_SIZE {
            log::warn!(
                "team '{}' has {} members, only checking the first {MAX_BATCH_SIZE}",
                roster.name,
                members.len(),
            );
        }

        let candidates = members.iter().take(MAX_BATCH_SIZE).cloned();
        let live = self.resolve_live(candidates, token).await?;

        Ok(Team {
            id: roster.id,
            name: roster.name,
            members,
            live,
        })
    }
}
