use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct CrawlOptions {
    /// Also crawl the imports of resolved packages
    #[arg(long)]
    pub traverse_modules: bool,

    /// Report absolute paths instead of paths relative to the first entry
    #[arg(long)]
    pub absolute: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        options: CrawlOptions,
    }

    #[test]
    fn test_defaults_are_off() {
        let cli = Cli::parse_from(["reqgraph"]);
        assert!(!cli.options.traverse_modules);
        assert!(!cli.options.absolute);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["reqgraph", "--traverse-modules", "--absolute"]);
        assert!(cli.options.traverse_modules);
        assert!(cli.options.absolute);
    }
}
