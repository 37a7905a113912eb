use crate::core::writer::{check_header, UTF8_BOM};
use crate::core::Storage;
use crate::domain::model::CandidateRow;
use crate::utils::error::{CandidateError, Result};

/// Parses a candidate file as written by `encode_csv`.
///
/// Domain and stratum are trimmed; rows where either ends up empty are dropped.
pub fn read_candidates(bytes: &[u8]) -> Result<Vec<CandidateRow>> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Fields)
        .from_reader(body);

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for record in reader.deserialize::<CandidateRow>() {
        let row = record?;
        if row.domain.is_empty() || row.stratum.is_empty() {
            dropped += 1;
            continue;
        }
        rows.push(row);
    }

    if dropped > 0 {
        tracing::warn!("Dropped {} row(s) with empty domain/stratum", dropped);
    }

    Ok(rows)
}

/// Reads `path` back from storage and checks it holds `expected` rows.
pub async fn verify_output<S: Storage>(storage: &S, path: &str, expected: usize) -> Result<usize> {
    let bytes = storage.read_file(path).await?;
    check_header(&bytes)?;

    let found = read_candidates(&bytes)?.len();
    if found != expected {
        return Err(CandidateError::ValidationError {
            message: format!("{} holds {} rows, expected {}", path, found, expected),
        });
    }

    tracing::info!("Verified {} rows in {}", found, path);
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::writer::encode_csv;

    #[test]
    fn test_reads_back_encoded_rows() {
        let rows = vec![
            CandidateRow::seeded("chula.ac.th", "EDU"),
            CandidateRow::seeded("scb.co.th", "FIN"),
        ];
        let bytes = encode_csv(&rows).unwrap();

        assert_eq!(read_candidates(&bytes).unwrap(), rows);
    }

    #[test]
    fn test_drops_rows_missing_domain_or_stratum() {
        let text = "domain,stratum,source,source_rank\n\
                    ku.ac.th , EDU ,seed_list,\n\
                    ,GOV,seed_list,\n\
                    tu.ac.th,  ,seed_list,\n";

        let rows = read_candidates(text.as_bytes()).unwrap();
        assert_eq!(rows, vec![CandidateRow::seeded("ku.ac.th", "EDU")]);
    }
}
