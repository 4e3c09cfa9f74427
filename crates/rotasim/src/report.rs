//! Report writers
//!
//! Two output variants: the normalized CSV sweep (one record per sweep
//! point) and the simple per-mode summary matching the original study's
//! print format. Both write to the caller's stream; logging stays on
//! stderr so stdout remains a clean report.

use std::io::Write;

use rotasim_core::{MonteCarloSummary, RotationMode, SweepRecord};

/// Header line plus one CSV record per sweep point.
pub fn write_sweep_csv<W: Write>(writer: W, records: &[SweepRecord]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "days",
        "mode",
        "rotation_period",
        "team_size",
        "person_days_rate",
        "healthy_rate",
    ])?;
    for record in records {
        wtr.write_record([
            record.days.to_string(),
            record.mode.code().to_string(),
            record.rotation_period.to_string(),
            record.team_size.to_string(),
            record.person_days_rate.to_string(),
            record.healthy_rate.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// The simple report variant: unnormalized per-mode means.
pub fn write_mode_summary<W: Write>(
    mut writer: W,
    summaries: &[(RotationMode, MonteCarloSummary)],
) -> std::io::Result<()> {
    for (mode, summary) in summaries {
        writeln!(
            writer,
            "Mode {} PersonDays of Work {} Number Healthy {}",
            mode.code(),
            summary.mean_person_days(),
            summary.mean_healthy()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotasim_core::TrialOutcome;

    #[test]
    fn sweep_csv_has_header_and_one_row_per_record() {
        let records = vec![SweepRecord {
            days: 100,
            mode: RotationMode::FixedHalves,
            rotation_period: 2,
            team_size: 30,
            person_days_rate: 0.5,
            healthy_rate: 0.9,
        }];
        let mut out = Vec::new();
        write_sweep_csv(&mut out, &records).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("days,mode,rotation_period,team_size,person_days_rate,healthy_rate")
        );
        assert_eq!(lines.next(), Some("100,2,2,30,0.5,0.9"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn mode_summary_matches_reference_format() {
        let mut summary = MonteCarloSummary::default();
        summary.record(TrialOutcome {
            person_days: 3,
            healthy_count: 4,
        });
        summary.record(TrialOutcome {
            person_days: 2,
            healthy_count: 4,
        });

        let mut out = Vec::new();
        write_mode_summary(&mut out, &[(RotationMode::FullTeam, summary)]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Mode 1 PersonDays of Work 2.5 Number Healthy 4\n"
        );
    }
}
