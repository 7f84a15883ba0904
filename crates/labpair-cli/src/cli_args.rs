use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "labpair")]
#[command(about = "Bottlenose staff lab pairing utility")]
#[command(
    after_help = "The KHOURY_USERNAME and KHOURY_PASSWORD environment variables can be set to fully automate this tool"
)]
#[command(version)]
pub struct CliArgs {
    /// ID of the course
    pub course: u64,

    /// CRN of the lab section
    pub lab: i64,

    /// Names of staff members, in assignment order
    #[arg(required = true, num_args = 1..)]
    pub staff: Vec<String>,

    /// Used to rotate staff members (may be negative)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i64,

    /// Name of the worksheet to read team data from
    #[arg(short, long, conflicts_with = "latest")]
    pub sheet: Option<String>,

    /// Use the most recent teamset worksheet
    #[arg(long)]
    pub latest: bool,

    /// Directory to write students.csv and staff.csv into
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Bottlenose site to log in to
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}
