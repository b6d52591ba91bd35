mod config;

use std::io::{self, Write};

use decoder_logging::{decoder_error, decoder_info, decoder_warn};
use link_decoder::{render_report, LinkDecoder, SAMPLE_TOKEN};

use config::{AppConfig, LOG_LEVEL_VAR};

fn main() {
    let config = AppConfig::from_env();
    decoder_logging::initialize(config.log_level);
    if let Some(rejected) = &config.rejected_log_level {
        eprintln!(
            "Warning: ignoring unrecognised {LOG_LEVEL_VAR}={rejected:?}; using {}",
            config.log_level
        );
    }

    let outcome = LinkDecoder::new().decode(SAMPLE_TOKEN);
    match &outcome {
        Ok(link) if link.lossy => {
            decoder_warn!("token decoded with replacement characters; inspect the output")
        }
        Ok(_) => decoder_info!("token decoded cleanly"),
        Err(err) => decoder_info!("token rejected at the {} stage", err.stage()),
    }

    let report = render_report(&outcome);
    if let Err(err) = write_report(&mut io::stdout().lock(), &report) {
        decoder_error!("failed to write report to stdout: {}", err);
    }
}

fn write_report(out: &mut impl Write, report: &str) -> io::Result<()> {
    out.write_all(report.as_bytes())?;
    out.flush()
}
