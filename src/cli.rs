use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "nextmeet",
    version,
    about = "Derive the next meetup record from the previous meetup page"
)]
pub struct Cli {
    /// SESH token, forwarded to downstream publishing steps (unused by
    /// the generation itself).
    #[arg(short, long)]
    pub token: Option<String>,

    /// Root of the published meetup pages, one subdirectory per year.
    #[arg(long, default_value = "./content/pages/meetup")]
    pub pages_dir: PathBuf,

    /// Field-pattern template applied to the previous page.
    #[arg(long, default_value = "./templates/meetup.template")]
    pub template: PathBuf,

    /// Previous meetup page; auto-discovered when omitted.
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Output JSON artifact, overwritten on every run.
    #[arg(long, default_value = "./meetup_information.json")]
    pub out: PathBuf,

    /// Run as if today were this date (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<NaiveDate>,
}
