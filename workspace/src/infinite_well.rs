use std::{ fs, path::PathBuf };
use qwell::{
    infinite::InfiniteWell,
    sample::{ self, BARRIER_POINTS },
    units::me,
};

const LENGTH: f64 = 2.0; // nm
const CENTRE: f64 = 0.0; // nm
const NUM_LEVELS: usize = 4;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut well = InfiniteWell::new();
    well.configure(LENGTH, me, CENTRE)?;

    let geom = well.params()?.geometry();
    let xargs = (geom.left() - 0.5, geom.right() + 0.5, BARRIER_POINTS);

    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)?;
    for n in 1..=NUM_LEVELS {
        let energy = well.energy(n)?;
        let table = well.sample(n, xargs)?;
        println!(
            "n = {:2}  E = {:.6} eV  ∫|ψ|² = {:.6}",
            n, energy, sample::probability(&table)?,
        );
        sample::write_table(
            outdir.join(format!("infinite_well_{}.txt", n)), &table)?;
    }
    Ok(())
}
