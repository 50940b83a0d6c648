use imprint::{
  png::{locate_text_chunk, RawChunkIter, PNG_SIGNATURE},
  probe, ImageFormat,
};
use walkdir::WalkDir;

fn walk_all(bytes: &[u8]) {
  if let Ok(it) = RawChunkIter::new(bytes) {
    for _ in it {
      //
    }
  }
  let _ = locate_text_chunk(bytes);
  let _ = probe(bytes, ImageFormat::Png);
  let _ = probe(bytes, ImageFormat::Svg);
}

#[test]
fn test_RawChunkIter_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    walk_all(&v);
  }
  // even totally random data should never panic the iterator!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    walk_all(&v);
  }
  // random data after a correct signature gets into the chunk walk proper
  for len in [0, 3, 8, 12, 25, 1024] {
    let mut v = PNG_SIGNATURE.to_vec();
    v.extend(super::rand_bytes(len));
    walk_all(&v);
  }
}

#[test]
fn test_small_lengths_walk_to_the_end() {
  // chunks that all declare 0 data bytes, with random tags and CRCs
  let mut v = PNG_SIGNATURE.to_vec();
  for _ in 0..50 {
    v.extend_from_slice(&[0; 4]);
    let mut tag = super::rand_bytes(4);
    if &tag[..] == b"IEND" {
      tag[0] = b'x';
    }
    v.extend(tag);
    v.extend(super::rand_bytes(4));
  }
  let chunks: Vec<_> = RawChunkIter::new(&v).unwrap().collect();
  assert_eq!(chunks.len(), 50);
  assert!(chunks.iter().all(Result::is_ok));
  assert_eq!(chunks.last().unwrap().as_ref().unwrap().span().end, v.len());
}
