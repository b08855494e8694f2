use vspace::{ config::RunConfig, potential::PotentialRegistry, solve };

// solve for the first few eigenstates of the linear harmonic oscillator

fn main() {
    let cfg = RunConfig {
        label: "Linear Harmonic Oscillator".to_string(),
        start: -10.0,
        stop: 10.0,
        num_states: 3,
        num_dimensions: 1,
        num_samples: 101,
        num_iterations: 5,
        ..Default::default()
    };
    let registry = PotentialRegistry::default();

    let run = solve::compute(&cfg, &registry).unwrap();

    println!("{}", cfg.label);
    println!(
        "grid: [{}, {}], N = {}, D = {}, dr = {:.4}",
        cfg.start, cfg.stop, cfg.num_samples, cfg.num_dimensions,
        run.grid.get_dr(),
    );
    for (k, sol) in run.states.iter().enumerate() {
        println!("E_{} = {:.6e}", k, sol.e);
    }
}
