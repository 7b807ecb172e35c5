use gumdrop::Options;

#[derive(Debug, Options)]
/// finds live channels worth raiding
pub struct Args {
    /// print this help message
    pub help: bool,

    #[options(command)]
    pub command: Option<Command>,
}

#[derive(Debug, Options)]
pub enum Command {
    /// list the raid options for a channel
    Suggest(Suggest),

    /// list the live channels a channel follows
    Followed(Followed),

    /// list the live members of a team
    Team(TeamArgs),
}

#[derive(Debug, Options)]
pub struct Suggest {
    /// print this help message
    pub help: bool,

    /// also list the live members of every team
    pub members: bool,

    /// name of the channel
    #[options(free)]
    pub name: Option<String>,
}

#[derive(Debug, Options)]
pub struct Followed {
    /// print this help message
    pub help: bool,

    /// treat the channel as an id rather than a name
    pub id: bool,

    /// name (or id) of the channel
    #[options(free)]
    pub channel: Option<String>,
}

#[derive(Debug, Options)]
pub struct TeamArgs {
    /// print this help message
    pub help: bool,

    /// id of the team
    #[options(free)]
    pub team: Option<String>,
}
