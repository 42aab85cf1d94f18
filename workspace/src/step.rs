use std::{ fs, path::PathBuf };
use qwell::{
    scatter::{ PotentialStep, Scattering },
    sample::{ self, DEF_RANGE, STEP_POINTS },
    units::me,
};

const HEIGHT: f64 = 1.0; // eV
const ENERGIES: [f64; 2] = [0.5, 2.0]; // eV

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)?;
    let xargs = (DEF_RANGE.0, DEF_RANGE.1, STEP_POINTS);
    let mut step = PotentialStep::new();
    for (k, &energy) in ENERGIES.iter().enumerate() {
        step.configure(me, energy, HEIGHT)?;
        let res = step.result()?;
        println!(
            "E = {:.3} eV  {:?}  T = {:.8}  R = {:.8}  T + R = {:.8}",
            energy, step.regime()?,
            res.transmission, res.reflection, res.total(),
        );
        sample::write_table(
            outdir.join(format!("step_{}.txt", k)), &step.sample(xargs)?)?;
    }
    Ok(())
}
