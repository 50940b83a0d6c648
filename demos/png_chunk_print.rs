use imprint::{
  normalize::{NormalizeOptions, Normalizer},
  png::{tEXt, RawChunkIter},
  probe, EncodedPayload, ImageFormat, Placeholders,
};

fn main() {
  let args: Vec<String> = std::env::args().collect();
  println!("ARGS: {args:?}");
  let placeholders = Placeholders::new();
  let normalizer = Normalizer::new(&placeholders, NormalizeOptions::default());
  for file_arg in args[1..].iter() {
    let path = std::path::Path::new(file_arg);
    print!("Reading `{}`... ", path.display());
    let bytes = match std::fs::read(path) {
      Ok(bytes) => {
        println!("got {} bytes.", bytes.len());
        bytes
      }
      Err(e) => {
        println!("{e:?}");
        continue;
      }
    };
    let format = match path.extension().and_then(|e| e.to_str()).and_then(ImageFormat::from_extension) {
      Some(format) => format,
      None => {
        println!("not a .png or .svg file");
        continue;
      }
    };
    if format == ImageFormat::Png {
      match RawChunkIter::new(&bytes) {
        Ok(it) => {
          for (n, raw_chunk) in it.enumerate() {
            println!("{n}: {raw_chunk:?}");
            if let Some(text) = raw_chunk.ok().and_then(|c| tEXt::try_from(c).ok()) {
              println!("   {} = {:?}", text.keyword_string(), text.text_string());
            }
          }
        }
        Err(e) => println!("{e}"),
      }
    }
    println!("size: {:?}", probe(&bytes, format));
    let payload = EncodedPayload::from_bytes(format, &bytes);
    match normalizer.normalize(&payload) {
      Ok(out) if out == payload => println!("normalize: unchanged"),
      Ok(out) => println!("normalize: {} -> {} base64 chars", payload.body().len(), out.body().len()),
      Err(e) => println!("normalize: {e}"),
    }
  }
}
