// bark services
// Collaborators of the bookmark store (title fetching, hostnames, time) and settings.

pub mod clock;
pub mod hostname;
pub mod settings_engine;
pub mod title_fetcher;
