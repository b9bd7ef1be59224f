use std::fs;

use tracing::{debug, info};

use crate::domain::models::{EventRecord, RunConfig};
use crate::error::GenError;
use crate::services::{locate, output, schedule, template};

/// Run the full pipeline and return the serialized artifact text.
pub fn run(cfg: &RunConfig) -> Result<String, GenError> {
    info!(today = %cfg.now, token = cfg.token.is_some(), "generating next meetup record");

    let tpl = template::FieldTemplate::load(&cfg.template_path)?;
    let source = match &cfg.source_path {
        Some(path) => path.clone(),
        None => locate::locate_source(&cfg.pages_dir, cfg.now.date())?,
    };
    let text = fs::read_to_string(&source)?;

    let headers = tpl.headers();
    let values = tpl.extract(&text)?;
    for (name, value) in headers.iter().zip(values.iter()) {
        debug!(field = %name, value = %value, "extracted field");
    }
    let mut record: EventRecord = template::record_from_row(&headers, &values);

    schedule::apply_derived_fields(&mut record, cfg.now);
    output::write_artifact(&cfg.output_path, &record)
}
