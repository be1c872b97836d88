//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats};

/// Prints lookup failure and info counts to the log.
///
/// Categories with a zero count are omitted.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    let total_info = error_stats.total_info();

    if total_errors > 0 {
        info!("Lookup Failure Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = error_stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = error_stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}

/// Logs a one-line summary of a batch run.
pub fn print_batch_summary(
    total: usize,
    processed: usize,
    written: usize,
    dropped: usize,
    elapsed_seconds: f64,
) {
    info!(
        "Classified {} of {} domain{} in {:.1}s ({} written, {} dropped for DNS errors)",
        processed,
        total,
        if total == 1 { "" } else { "s" },
        elapsed_seconds,
        written,
        dropped
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_statistics_no_errors() {
        let stats = ProcessingStats::new();
        // Should not panic when there are no errors
        print_error_statistics(&stats);
    }

    #[test]
    fn test_print_error_statistics_all_types() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::DnsMxLookupError);
        stats.increment_error(ErrorType::DnsDmarcLookupError);
        stats.increment_info(InfoType::DisposableDomain);
        stats.increment_info(InfoType::UndeterminableProvider);
        print_error_statistics(&stats);
    }

    #[test]
    fn test_print_batch_summary() {
        print_batch_summary(1, 1, 1, 0, 0.2);
        print_batch_summary(10, 7, 5, 2, 3.5);
    }
}
