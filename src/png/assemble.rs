use std::sync::Arc;

use super::*;

/// Runs the fixed claim plan for the known chunk kinds, building a container.
///
/// The plan claims `IHDR`, then every `IDAT`, then each optional ancillary
/// kind once (`PLTE`, `bKGD`, `cHRM`, `gAMA`, `hIST`, `pHYs`, `sBIT`, `tRNS`,
/// `tIME`), then every `tEXt` and `zTXt`, then `IEND`. Where a chunk sits in
/// the stream doesn't change what it's claimed as.
///
/// Whatever is left in the pool afterwards becomes the container's residual
/// pool. The pool takes its [`ParseFailurePolicy`] from the config, however
/// it was built.
///
/// ## Failure
/// * No `IHDR`, or an `IHDR` that doesn't parse: [`FormatError::MissingHeader`]
/// * No `IDAT`: [`FormatError::NoImageData`]
/// * An `IDAT`, `tEXt`, or `zTXt` that doesn't parse:
///   [`FormatError::InvalidChunk`]
/// * No `IEND`: [`FormatError::MissingTerminator`]
/// * An optional ancillary chunk that doesn't parse is skipped, unless
///   [`ParseConfig::strict_ancillary`] is set, then it's
///   [`FormatError::InvalidChunk`].
pub fn assemble(mut pool: ChunkPool, config: &ParseConfig) -> Result<PngContainer, PngError> {
  pool.set_parse_failure_policy(config.parse_failure);
  let header = match pool.claim(&Builtin::<IHDR>::new()) {
    Ok(header) => header,
    Err(ClaimError::NotFound(_)) => return Err(FormatError::MissingHeader { cause: None }.into()),
    Err(ClaimError::Parse { source, .. }) => {
      return Err(FormatError::MissingHeader { cause: Some(source) }.into())
    }
  };
  tracing::trace!(?header, "claimed header");

  let image_data: Vec<IDAT> = claim_repeatable(&mut pool)?;
  if image_data.is_empty() {
    return Err(FormatError::NoImageData.into());
  }

  let mut skipped = Vec::new();
  let palette = claim_optional::<PLTE>(&mut pool, config, &mut skipped)?;
  let background = claim_optional::<bKGD>(&mut pool, config, &mut skipped)?;
  let chromaticities = claim_optional::<cHRM>(&mut pool, config, &mut skipped)?;
  let gamma = claim_optional::<gAMA>(&mut pool, config, &mut skipped)?;
  let histogram = claim_optional::<hIST>(&mut pool, config, &mut skipped)?;
  let physical_dimensions = claim_optional::<pHYs>(&mut pool, config, &mut skipped)?;
  let significant_bits = claim_optional::<sBIT>(&mut pool, config, &mut skipped)?;
  let transparency = claim_optional::<tRNS>(&mut pool, config, &mut skipped)?;
  let modified = claim_optional::<tIME>(&mut pool, config, &mut skipped)?;

  let texts: Vec<tEXt> = claim_repeatable(&mut pool)?;
  let compressed_texts: Vec<zTXt> = claim_repeatable(&mut pool)?;

  let terminal = match pool.claim(&Builtin::<IEND>::new()) {
    Ok(terminal) => terminal,
    Err(ClaimError::NotFound(_)) => return Err(FormatError::MissingTerminator.into()),
    Err(ClaimError::Parse { tag, source }) => {
      return Err(FormatError::InvalidChunk { tag, source }.into())
    }
  };

  tracing::debug!(
    width = header.width,
    height = header.height,
    idat = image_data.len(),
    text = texts.len(),
    ztxt = compressed_texts.len(),
    skipped = skipped.len(),
    residual = pool.len(),
    "assembled PNG container"
  );

  Ok(PngContainer {
    header,
    image_data,
    palette,
    background,
    chromaticities,
    gamma,
    histogram,
    physical_dimensions,
    significant_bits,
    transparency,
    modified,
    texts,
    compressed_texts,
    terminal,
    skipped,
    residual: pool,
    fallback: Arc::new(FallbackStore::new()),
  })
}

/// Claims one chunk of an optional kind.
fn claim_optional<T: KnownChunk>(
  pool: &mut ChunkPool, config: &ParseConfig, skipped: &mut Vec<(ChunkTag, ParseError)>,
) -> Result<Option<T>, FormatError> {
  match pool.claim(&Builtin::<T>::new()) {
    Ok(value) => Ok(Some(value)),
    Err(ClaimError::NotFound(_)) => Ok(None),
    Err(ClaimError::Parse { tag, source }) if config.strict_ancillary => {
      Err(FormatError::InvalidChunk { tag, source })
    }
    Err(ClaimError::Parse { tag, source }) => {
      tracing::warn!(%tag, error = %source, "skipping ancillary chunk");
      skipped.push((tag, source));
      Ok(None)
    }
  }
}

/// Claims every chunk of a repeatable kind, in stream order.
fn claim_repeatable<T: KnownChunk>(pool: &mut ChunkPool) -> Result<Vec<T>, FormatError> {
  pool.claim_all(&Builtin::<T>::new()).map_err(|e| match e {
    ClaimError::Parse { tag, source } => FormatError::InvalidChunk { tag, source },
    ClaimError::NotFound(_) => unreachable!("claim_all ends on NotFound"),
  })
}
