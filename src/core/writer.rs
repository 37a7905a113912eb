use crate::domain::model::{CandidateRow, StratumSample};
use crate::utils::error::{CandidateError, Result};
use std::collections::BTreeMap;

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Header order of the candidate file; follows the `CandidateRow` field order.
pub const CANDIDATE_HEADER: [&str; 4] = ["domain", "stratum", "source", "source_rank"];

/// One row per (stratum, domain), strata in sample order, domains in collector order.
pub fn build_rows(samples: &[StratumSample]) -> Vec<CandidateRow> {
    samples
        .iter()
        .flat_map(|sample| {
            sample
                .domains
                .iter()
                .map(move |domain| CandidateRow::seeded(domain, &sample.name))
        })
        .collect()
}

/// Encodes rows as BOM-prefixed CSV with a header line.
pub fn encode_csv(rows: &[CandidateRow]) -> Result<Vec<u8>> {
    let mut buffer = UTF8_BOM.to_vec();
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(&mut buffer);

        // Written explicitly so an empty row set still carries the header.
        writer.write_record(CANDIDATE_HEADER)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }

    tracing::debug!("Encoded {} rows into {} bytes", rows.len(), buffer.len());
    Ok(buffer)
}

/// Row count per stratum, keyed and therefore ordered by stratum name.
pub fn count_by_stratum(rows: &[CandidateRow]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        *counts.entry(row.stratum.clone()).or_insert(0) += 1;
    }
    counts
}

/// `{'EDU': 50, 'GOV': 50}`
pub fn format_counts(counts: &BTreeMap<String, usize>) -> String {
    let entries: Vec<String> = counts
        .iter()
        .map(|(stratum, count)| format!("'{}': {}", stratum, count))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

/// Fails if the encoded output does not start with the BOM and header line.
pub fn check_header(bytes: &[u8]) -> Result<()> {
    let expected = format!("{}\r\n", CANDIDATE_HEADER.join(","));
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if !bytes.starts_with(UTF8_BOM) || !body.starts_with(expected.as_bytes()) {
        return Err(CandidateError::ValidationError {
            message: "candidate file is missing the BOM or header row".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, domains: &[&str]) -> StratumSample {
        StratumSample {
            name: name.to_string(),
            domains: domains.iter().map(|d| d.to_string()).collect(),
            unique_count: domains.len(),
        }
    }

    #[test]
    fn test_row_fan_out() {
        let rows = build_rows(&[sample("A", &["x.com", "y.com"]), sample("B", &["z.com"])]);

        assert_eq!(
            rows,
            vec![
                CandidateRow::seeded("x.com", "A"),
                CandidateRow::seeded("y.com", "A"),
                CandidateRow::seeded("z.com", "B"),
            ]
        );
        assert!(rows.iter().all(|r| r.source == "seed_list" && r.source_rank.is_empty()));
    }

    #[test]
    fn test_encode_csv_layout() {
        let rows = build_rows(&[sample("GOV", &["opm.go.th", "mdes.go.th"])]);
        let bytes = encode_csv(&rows).unwrap();

        assert!(bytes.starts_with(UTF8_BOM));
        let text = std::str::from_utf8(&bytes[UTF8_BOM.len()..]).unwrap();
        assert_eq!(
            text,
            "domain,stratum,source,source_rank\r\n\
             opm.go.th,GOV,seed_list,\r\n\
             mdes.go.th,GOV,seed_list,\r\n"
        );
        assert!(check_header(&bytes).is_ok());
    }

    #[test]
    fn test_encode_csv_empty_still_has_header() {
        let bytes = encode_csv(&[]).unwrap();
        assert!(check_header(&bytes).is_ok());
        assert_eq!(&bytes[UTF8_BOM.len()..], b"domain,stratum,source,source_rank\r\n");
    }

    #[test]
    fn test_embedded_delimiter_is_quoted() {
        let rows = vec![CandidateRow::seeded("a,b.com", "X")];
        let text = String::from_utf8(encode_csv(&rows).unwrap()).unwrap();
        assert!(text.contains("\"a,b.com\",X,seed_list,"));
    }

    #[test]
    fn test_counts_sorted_by_name() {
        let rows = build_rows(&[
            sample("TRAVEL_SERVICES", &["agoda.com"]),
            sample("EDU", &["ku.ac.th", "tu.ac.th"]),
        ]);
        let counts = count_by_stratum(&rows);

        assert_eq!(format_counts(&counts), "{'EDU': 2, 'TRAVEL_SERVICES': 1}");
    }

    #[test]
    fn test_counts_empty() {
        assert_eq!(format_counts(&BTreeMap::new()), "{}");
    }

    #[test]
    fn test_rows_end_with_crlf() {
        let rows = vec![CandidateRow::seeded("x.com", "A")];
        let bytes = encode_csv(&rows).unwrap();

        assert!(bytes.ends_with(b"x.com,A,seed_list,\r\n"));
        assert!(!bytes.windows(2).any(|w| w[1] == b'\n' && w[0] != b'\r'));
    }

    #[test]
    fn test_check_header_rejects_missing_bom() {
        assert!(check_header(b"domain,stratum,source,source_rank\r\n").is_err());
    }
}
