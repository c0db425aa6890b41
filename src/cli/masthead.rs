use std::fmt;

pub const NAME: &str = "ProjSpell - The Project Level Spellchecker";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");

/// Startup banner. The verbose form adds author and project details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Masthead {
    pub verbose: bool,
}

impl Masthead {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl fmt::Display for Masthead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version = format!("Version {}", VERSION);

        if self.verbose {
            // Cargo joins multiple authors with ':'
            let mut content: Vec<&str> = vec![NAME];
            content.extend(AUTHORS.split(':').filter(|a| !a.is_empty()));
            content.extend([REPOSITORY, version.as_str(), " "]);
            write!(f, "{}", content.join("\n   "))
        } else {
            write!(f, "{} - {}", NAME, version)
        }
    }
}
