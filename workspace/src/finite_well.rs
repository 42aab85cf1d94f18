use std::{ fs, path::PathBuf };
use qwell::{
    finite::{ FiniteWell, SearchParams },
    params::FiniteWellParams,
    sample::{ self, BARRIER_POINTS },
    units::me,
};

const LENGTH: f64 = 2.0; // nm
const DEPTH: f64 = 1.1; // eV
const CENTRE: f64 = 0.0; // nm
const MASS_WELL: f64 = 0.067 * me; // GaAs
const MASS_BARR: f64 = 0.092 * me; // AlGaAs

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let params
        = FiniteWellParams::new(LENGTH, MASS_WELL, MASS_BARR, DEPTH, CENTRE)?;
    let search = SearchParams { samples: Some(256), ..Default::default() };
    let well = FiniteWell::from_params(params, search)?;

    println!(
        "found {} bound states (expected {})",
        well.n_states()?, well.expected_states()?,
    );

    let geom = well.params()?.geometry();
    let xargs = (geom.left() - 2.0, geom.right() + 2.0, BARRIER_POINTS);

    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)?;
    for state in well.states()?.iter() {
        let table = well.sample(state.n, xargs)?;
        println!(
            "n = {:2}  {:?}  E = {:.8} eV  ∫|ψ|² = {:.6}",
            state.n, state.parity, state.energy,
            sample::probability(&table)?,
        );
        sample::write_table(
            outdir.join(format!("finite_well_{}.txt", state.n)), &table)?;
    }
    Ok(())
}
