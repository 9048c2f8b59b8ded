use std::io::Write;

use di_hash::Accumulator;
use di_uri::{ComputeRequest, DigestComputer, DigestUri, QueryForm, Source, UriError};

const HGLAG_HEX: &str = "01e9164cf879dd0c62f2b3b9ddf8c54106d497f094379b74abeda5c891c8a99e";
const HGLAG_URI: &str = "di:sha-256;AekWTPh53Qxi8rO53fjFQQbUl_CUN5t0q-2lyJHIqZ4";

// ── Reference vector ────────────────────────────────────────────────

#[test]
fn hglag_scalar() {
    let uri = DigestComputer::new()
        .compute(ComputeRequest::for_source("hglaguaghlag").algorithm("sha-256"))
        .unwrap();
    assert_eq!(uri.hexdigest().unwrap(), HGLAG_HEX);
    assert_eq!(uri.to_string(), HGLAG_URI);
}

#[test]
fn hglag_default_algorithm() {
    let uri = DigestComputer::new()
        .compute(ComputeRequest::for_source("hglaguaghlag"))
        .unwrap();
    assert_eq!(uri.algorithm(), "sha-256");
    assert_eq!(uri.to_string(), HGLAG_URI);
}

#[test]
fn hglag_every_source_kind() {
    let computer = DigestComputer::new();
    let data: &[u8] = b"hglaguaghlag";

    let sources = vec![
        Source::stream(data),
        Source::buffer(data),
        Source::buffer(data.to_vec()),
        Source::callback(|acc: &mut dyn Accumulator| {
            for byte in data {
                acc.write_all(std::slice::from_ref(byte))?;
            }
            Ok(())
        }),
        Source::scalar("hglaguaghlag"),
    ];

    for source in sources {
        let kind = source.kind();
        let uri = computer.compute(ComputeRequest::for_source(source)).unwrap();
        assert_eq!(uri.to_string(), HGLAG_URI, "source kind {kind}");
    }
}

#[test]
fn hglag_parsed_back() {
    let uri: DigestUri = HGLAG_URI.parse().unwrap();
    assert_eq!(uri.algorithm(), "sha-256");
    assert_eq!(uri.hexdigest().unwrap(), HGLAG_HEX);
    assert!(DigestComputer::new().verify(&uri, "hglaguaghlag").unwrap());
}

// ── Stream sources ──────────────────────────────────────────────────

#[test]
fn file_stream_matches_buffer() {
    let data: Vec<u8> = (0..200_000u32).map(|n| (n % 251) as u8).collect();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    let computer = DigestComputer::new();
    let from_file = computer
        .compute(ComputeRequest::for_source(Source::open(file.path()).unwrap()))
        .unwrap();
    let from_buffer = computer
        .compute(ComputeRequest::for_source(data))
        .unwrap();
    assert_eq!(from_file, from_buffer);
}

#[test]
fn reopened_handle_streams_remaining_bytes() {
    use std::io::{Seek, SeekFrom};

    let mut file = tempfile::tempfile().unwrap();
    file.write_all(b"skipped:hglaguaghlag").unwrap();
    file.seek(SeekFrom::Start(8)).unwrap();

    let uri = DigestComputer::new()
        .compute(ComputeRequest::for_source(Source::stream(&mut file)))
        .unwrap();
    assert_eq!(uri.to_string(), HGLAG_URI);
}

// ── Errors ──────────────────────────────────────────────────────────

#[test]
fn unsupported_algorithm_produces_nothing() {
    let result = DigestComputer::new()
        .compute(ComputeRequest::for_source("hglaguaghlag").algorithm("not-a-real-algo"));
    match result {
        Err(UriError::UnsupportedAlgorithm { name }) => assert_eq!(name, "not-a-real-algo"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn directory_is_invalid_source() {
    let dir = tempfile::tempdir().unwrap();
    let err = Source::open(dir.path()).unwrap_err();
    assert!(matches!(err, UriError::InvalidSource { .. }));
}

#[test]
fn missing_source() {
    let err = DigestComputer::new()
        .compute(ComputeRequest::new())
        .unwrap_err();
    assert!(matches!(err, UriError::MissingSource));
    assert_eq!(err.to_string(), "no input source given");
}

#[test]
fn callback_failure_surfaces_as_io() {
    let source = Source::callback(|_: &mut dyn Accumulator| {
        Err(std::io::Error::new(std::io::ErrorKind::InvalidData, "broken serializer"))
    });
    let err = DigestComputer::new()
        .compute(ComputeRequest::for_source(source))
        .unwrap_err();
    assert!(matches!(err, UriError::Io(_)));
}

// ── Query component ─────────────────────────────────────────────────

#[test]
fn query_appended_in_insertion_order() {
    let mut query = QueryForm::new();
    query.append("ct", "text/plain");
    query.append("loc", "http://example.com/a b");
    query.append("ct", "text/x-hglag");

    let uri = DigestComputer::new()
        .compute(ComputeRequest::for_source("hglaguaghlag").query(query.clone()))
        .unwrap();
    assert_eq!(
        uri.to_string(),
        format!(
            "{HGLAG_URI}?ct=text%2Fplain&ct=text%2Fx-hglag&loc=http%3A%2F%2Fexample.com%2Fa+b"
        )
    );
    assert_eq!(uri.query(), Some(query));
    assert_eq!(uri.hexdigest().unwrap(), HGLAG_HEX);
}

// ── Concurrency ─────────────────────────────────────────────────────

#[test]
fn shared_computer_across_threads() {
    let computer = DigestComputer::new();
    let uris: Vec<DigestUri> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let computer = &computer;
                scope.spawn(move || {
                    computer
                        .compute(ComputeRequest::for_source("hglaguaghlag"))
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(uris.iter().all(|uri| uri.to_string() == HGLAG_URI));
}
