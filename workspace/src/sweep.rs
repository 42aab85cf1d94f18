use std::{ fs, path::PathBuf };
use ndarray as nd;
use qwell::{ sample, scatter, units::me };

const HEIGHT: f64 = 1.0; // eV
const WIDTH: f64 = 0.5; // nm

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let energies: nd::Array1<f64> = nd::Array1::linspace(0.01, 0.99, 99);
    let t_step = scatter::step_transmission(me, HEIGHT, &energies);
    let t_barr = scatter::barrier_transmission(me, HEIGHT, WIDTH, &energies);

    // step transmission is zero throughout the tunnelling range, so sweep it
    // above the step height as well
    let energies_above: nd::Array1<f64> = nd::Array1::linspace(1.01, 5.0, 400);
    let t_above = scatter::step_transmission(me, HEIGHT, &energies_above);

    let table: nd::Array2<f64>
        = nd::stack(nd::Axis(1), &[energies.view(), t_step.view(), t_barr.view()])?;
    let table_above: nd::Array2<f64>
        = nd::stack(nd::Axis(1), &[energies_above.view(), t_above.view()])?;

    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)?;
    sample::write_table(outdir.join("sweep_tunnel.txt"), &table)?;
    sample::write_table(outdir.join("sweep_step.txt"), &table_above)?;
    println!(
        "barrier T ranges over [{:.3e}, {:.3e}]",
        t_barr.iter().copied().fold(f64::INFINITY, f64::min),
        t_barr.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    );
    Ok(())
}
