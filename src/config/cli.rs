use clap::Subcommand;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Diagnose symptoms; reads dictated text from stdin when no words are given
    Diagnose {
        symptoms: Vec<String>,
    },
    /// Look up a single medicine by name
    Medicine {
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// List every medicine the backend knows about
    Medicines,
    /// Show recent diagnoses
    History,
    /// Print the emergency medical guide
    Emergency,
    /// Print information about medicino
    About,
    /// Report which backend answers
    Detect,
}

impl Command {
    /// Static pages render without contacting a backend.
    pub fn needs_backend(&self) -> bool {
        !matches!(self, Command::Emergency | Command::About)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_pages_skip_backend() {
        assert!(!Command::Emergency.needs_backend());
        assert!(!Command::About.needs_backend());
        assert!(Command::History.needs_backend());
        assert!(Command::Diagnose { symptoms: vec![] }.needs_backend());
    }
}
