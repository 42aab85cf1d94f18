use std::{ fs, path::PathBuf };
use qwell::{
    scatter::{ PotentialBarrier, Scattering },
    sample::{ self, BARRIER_POINTS },
    units::me,
};

const HEIGHT: f64 = 2.0; // eV
const ENERGY: f64 = 1.0; // eV
const WIDTHS: [f64; 3] = [0.1, 0.3, 1.0]; // nm

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)?;
    let mut barrier = PotentialBarrier::new();
    for (k, &width) in WIDTHS.iter().enumerate() {
        barrier.configure(me, ENERGY, HEIGHT, width)?;
        let res = barrier.result()?;
        println!(
            "W = {:.2} nm  κW = {:.4} ({:?})  T = {:.6e}  R = {:.8}",
            width, barrier.figure_of_merit()?, barrier.barrier_kind()?,
            res.transmission, res.reflection,
        );
        let xargs = (-3.0, width + 3.0, BARRIER_POINTS);
        sample::write_table(
            outdir.join(format!("barrier_{}.txt", k)),
            &barrier.sample(xargs)?,
        )?;
    }
    Ok(())
}
