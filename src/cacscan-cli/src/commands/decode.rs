//! Single payload decoding

use anyhow::{Context, Result};
use cacscan::Barcode;
use std::io::Write;

use crate::export::DOB_FORMAT;

/// Handle the decode command
pub fn handle(raw: &str, json: bool) -> Result<()> {
    let barcode = cacscan::identify(raw).context("Failed to parse barcode data")?;
    tracing::debug!(format = %barcode.format(), edipi = barcode.edipi(), "decoded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &barcode)?;
        writeln!(out)?;
    } else {
        print_barcode(&mut out, &barcode)?;
    }

    Ok(())
}

/// Write a labelled field listing for a decoded barcode
pub fn print_barcode<W: Write>(out: &mut W, barcode: &Barcode) -> Result<()> {
    writeln!(out, "Type:     {}", barcode.format())?;
    writeln!(out, "EDIPI:    {}", barcode.edipi())?;

    if let Barcode::Pdf417(card) = barcode {
        writeln!(out, "Version:  {}", card.barcode_version)?;
        writeln!(out, "Name:     {}", card.name)?;
        writeln!(out, "DOB:      {}", card.dob.format(DOB_FORMAT))?;
        writeln!(out, "Branch:   {}", card.branch)?;
        writeln!(out, "Category: {}", card.category)?;
        writeln!(out, "Rank:     {}", card.rank)?;
        writeln!(out, "PCC:      {}", card.pcc)?;
        writeln!(out, "PPC:      {}", card.ppc)?;
        writeln!(out, "PPGC:     {}", card.ppgc)?;
        writeln!(out, "PDI:      {}", card.pdi)?;
    }

    Ok(())
}
