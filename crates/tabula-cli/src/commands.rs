use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info_span;

use tabula_model::{ExportRequest, ImportOptions};
use tabula_sheet::{CsvCodec, SheetCodec, XlsxCodec, export, try_import_base64, try_import_bytes};
use tabula_store::{
    PathResolver, RootedResolver, encode_base64, encode_data_uri, fetch_text, random_token,
    randomized_file_name, try_delete, try_read_bytes, try_read_to_string, try_write_base64,
};

use tabula_cli::records::records_from_json;
use tabula_cli::summary::print_import;

use crate::cli::{
    DecodeArgs, DeleteArgs, EncodeArgs, ExportArgs, FetchArgs, ImportArgs, RenameArgs,
    SheetFormatArg, TokenArgs,
};

fn codec_for(format: SheetFormatArg) -> &'static dyn SheetCodec {
    match format {
        SheetFormatArg::Xlsx => &XlsxCodec,
        SheetFormatArg::Csv => &CsvCodec,
    }
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn run_export(args: &ExportArgs) -> Result<PathBuf> {
    let span = info_span!("export", input = %args.input.display());
    let _guard = span.enter();

    let text = try_read_to_string(&args.input).context("read records")?;
    let records = records_from_json(&text)?;
    let output_folder = match &args.root {
        Some(root) => RootedResolver::new(root).resolve(&args.output_folder),
        None => PathBuf::from(&args.output_folder),
    };
    let request = ExportRequest::new(output_folder, &args.file_name_base)
        .with_sheet_name(&args.sheet_name)
        .with_headers(args.headers.clone());

    export(&records, &request, codec_for(args.format)).map_err(|err| anyhow!(err.user_message()))
}

pub fn run_import(args: &ImportArgs) -> Result<bool> {
    let span = info_span!("import", input = %args.input.display());
    let _guard = span.enter();

    let options = ImportOptions::new(args.start_row, args.start_column, args.total_columns);
    let codec = codec_for(args.format);
    let result = if args.base64 {
        let text = try_read_to_string(&args.input).context("read base64 input")?;
        try_import_base64(&text, options, codec)
    } else {
        let bytes = try_read_bytes(&args.input).context("read workbook")?;
        try_import_bytes(&bytes, options, codec)
    }
    .context("open workbook")?;

    print_import(&result, args.start_row);
    Ok(result.has_failures())
}

pub fn run_encode(args: &EncodeArgs) -> Result<()> {
    let bytes = try_read_bytes(&args.input).context("read input")?;
    let encoded = match &args.mime {
        Some(mime) => encode_data_uri(mime, &bytes),
        None => encode_base64(&bytes),
    };
    println!("{encoded}");
    Ok(())
}

pub fn run_decode(args: &DecodeArgs) -> Result<()> {
    let text = try_read_to_string(&args.input).context("read base64 input")?;
    try_write_base64(&args.output, &text).context("write decoded output")?;
    println!("{}", args.output.display());
    Ok(())
}

pub fn run_delete(args: &DeleteArgs) -> Result<bool> {
    let removed = try_delete(&args.path).context("delete file")?;
    if !removed {
        println!("Nothing to delete at {}", args.path.display());
    }
    Ok(removed)
}

pub fn run_token(args: &TokenArgs) {
    let mut rng = rng_for(args.seed);
    println!("{}", random_token(&mut rng, args.length));
}

pub fn run_rename(args: &RenameArgs) -> Result<()> {
    let mut rng = rng_for(args.seed);
    let Some(name) = randomized_file_name(&mut rng, &args.file_name) else {
        bail!("'{}' has no extension to keep", args.file_name);
    };
    println!("{name}");
    Ok(())
}

pub fn run_fetch(args: &FetchArgs) -> Result<()> {
    let body = fetch_text(&args.url)?;
    print!("{body}");
    Ok(())
}
