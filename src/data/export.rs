//! CSV / JSON export of winding results.

use std::io::Write;
use std::path::Path;

use super::curve::FrequencyCurve;
use super::snapshot::WindingSnapshot;
use crate::error::Result;

/// Write `period,real,imag,magnitude` rows in ascending period order.
pub fn write_frequency_curve_csv<W: Write>(mut w: W, curve: &FrequencyCurve) -> std::io::Result<()> {
    writeln!(w, "period,real,imag,magnitude")?;
    for e in curve.entries() {
        writeln!(
            w,
            "{:.9},{},{},{}",
            e.period,
            e.centroid.re,
            e.centroid.im,
            e.centroid.magnitude()
        )?;
    }
    w.flush()
}

/// Write the ring point cloud of a snapshot as `index,real,imag` rows.
pub fn write_ring_csv<W: Write>(mut w: W, snapshot: &WindingSnapshot) -> std::io::Result<()> {
    writeln!(w, "index,real,imag")?;
    for (i, p) in snapshot.ring.iter().enumerate() {
        writeln!(w, "{},{},{}", i, p[0], p[1])?;
    }
    w.flush()
}

pub fn save_frequency_curve_csv<P: AsRef<Path>>(path: P, curve: &FrequencyCurve) -> Result<()> {
    let f = std::fs::File::create(path.as_ref())?;
    write_frequency_curve_csv(std::io::BufWriter::new(f), curve)?;
    log::info!(
        "exported {} frequency curve entries to {:?}",
        curve.len(),
        path.as_ref()
    );
    Ok(())
}

pub fn save_ring_csv<P: AsRef<Path>>(path: P, snapshot: &WindingSnapshot) -> Result<()> {
    let f = std::fs::File::create(path.as_ref())?;
    write_ring_csv(std::io::BufWriter::new(f), snapshot)?;
    log::info!("exported {} ring points to {:?}", snapshot.ring.len(), path.as_ref());
    Ok(())
}

/// Pretty-printed JSON of a full snapshot.
pub fn save_snapshot_json<P: AsRef<Path>>(path: P, snapshot: &WindingSnapshot) -> Result<()> {
    let f = std::fs::File::create(path.as_ref())?;
    let mut w = std::io::BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, snapshot)?;
    w.flush()?;
    log::info!("saved snapshot (period {}) to {:?}", snapshot.period, path.as_ref());
    Ok(())
}

pub fn load_snapshot_json<P: AsRef<Path>>(path: P) -> Result<WindingSnapshot> {
    let s = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&s)?)
}

/// Default file name for an export started now, e.g. `winding_curve_1718000000000.csv`.
pub fn default_export_name(stem: &str, ext: &str) -> String {
    format!("{stem}_{}.{ext}", chrono::Local::now().timestamp_millis())
}
