//! Unit tests mirroring the `src/` layout, one file per source module

mod algorithm;

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use donjon::io::cli::Cli;

    // Tests the binary's argument definitions are consistent
    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
