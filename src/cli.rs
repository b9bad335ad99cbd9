use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "routescan",
    version,
    about = "List HTTP routes registered through gin-style routers in Go source",
    after_help = r#"Examples:
  routescan cmd/api/main.go
  routescan --workspace .
  ROUTESCAN_LOG=debug routescan internal/http/router.go
"#
)]
pub struct Args {
    /// Go source file to scan. Routes are printed as a JSON array.
    #[arg(value_name = "FILE", required_unless_present = "workspace")]
    pub file: Option<PathBuf>,

    /// Scan every project (directory holding main.go) under this directory.
    #[arg(long, value_name = "DIR", conflicts_with = "file")]
    pub workspace: Option<PathBuf>,

    /// Include files ignored by .gitignore (workspace mode).
    #[arg(long, requires = "workspace")]
    pub no_ignore: bool,
}
