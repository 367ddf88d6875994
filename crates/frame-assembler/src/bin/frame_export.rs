//! Assemble the reference portal frame and export its render mesh as JSON.
//!
//! Usage: frame-export [params.json] [out.json]
//!
//! With no arguments the reference parameter set is used and the mesh is
//! written to portal_frame_mesh.json in the working directory.

use std::{env, fs};

use frame_assembler::assemble;
use frame_kernel::{Kernel, TruckKernel};
use frame_types::FrameParameters;

/// Chord tolerance for the export tessellation, in model units.
const MESH_TOLERANCE: f64 = 1.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = env::args().skip(1);
    let params = match args.next() {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => FrameParameters::default(),
    };
    let out_path = args
        .next()
        .unwrap_or_else(|| "portal_frame_mesh.json".to_string());

    let mut kernel = TruckKernel::new();
    let frame = assemble(&mut kernel, &params)?;
    let mesh = kernel.tessellate(&frame.handle, MESH_TOLERANCE)?;
    fs::write(&out_path, serde_json::to_vec(&mesh)?)?;

    println!(
        "wrote {} ({} parts, {} triangles)",
        out_path,
        frame.part_count,
        mesh.indices.len() / 3
    );
    Ok(())
}
