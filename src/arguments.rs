use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about, bin_name = "update-version")]
pub struct Arguments {
    /// The path to the versioning file
    #[arg(default_value = "./version.txt")]
    pub path: String,
    /// Enable verbose mode
    #[arg(long, short)]
    pub verbose: bool,
    /// Print the current project's version
    #[arg(long, short = 'P')]
    pub print_version: bool,
    /// List all versions of this tool
    #[arg(long, short = 'L')]
    pub list_versions: bool,
    /// Don't modify the file, but do execute the rest
    #[arg(long, short = 'D')]
    pub dry_run: bool,
    /// Update the extra `N` (X.Y.Z-N) component. This auto-enables `-d`
    #[arg(long, short)]
    pub extra: bool,
    /// Update the patch `Z` (X.Y.Z[-N]) component
    #[arg(long, short)]
    pub patch: bool,
    /// Update the minor `Y` (X.Y.Z[-N]) component
    #[arg(long, short)]
    pub minor: bool,
    /// Update the major `X` (X.Y.Z[-N]) component
    #[arg(long, short = 'M')]
    pub major: bool,
    /// Whether the version spec includes dashes
    #[arg(long, short)]
    pub dashed: bool,
    /// A custom version to write verbatim. Versions with a dash `-` require `-d`
    #[arg(
        long = "replace-with",
        short = 'r',
        default_value = "",
        value_name = "<MAJOR>.<MINOR>.<PATCH>[-<EXTRA>]"
    )]
    pub replace: String,
}
