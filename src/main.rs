//! Headless CLI: load a structure file or a directory of them, apply an
//! optional options preset, and report what the viewer would show.

use std::path::{Path, PathBuf};

use molviz::molecule::{BasePrimitives, MoleculeChain};
use molviz::options::Options;
use molviz::scene::Scene;

fn run(path: &Path, options: &Options) -> Result<(), molviz::error::MolvizError> {
    let mut scene = Scene::new();
    scene.camera_mut().fovy = options.camera.fovy;
    scene.camera_mut().znear = options.camera.znear;
    scene.camera_mut().zfar = options.camera.zfar;
    scene.set_camera_distance(options.camera.distance);

    let primitives = BasePrimitives::default();
    let mut chain = MoleculeChain::load(path, &primitives, &mut scene)?;
    chain.set_atom_scale(&mut scene, options.display.atom_scale);
    chain.set_bond_radius(&mut scene, options.display.bond_radius);
    chain.set_show_bonds(&mut scene, options.display.show_bonds);
    chain.set_animate(options.display.animate);
    chain.set_animation_speed(options.display.animation_speed);

    log::info!("loaded {} molecule(s) from {}", chain.len(), path.display());
    for (i, molecule) in chain.molecules().iter().enumerate() {
        let marker = if i == chain.active_index() { "*" } else { " " };
        match molecule.bounds(&scene) {
            Some(b) => log::info!(
                "{marker} [{i}] {}: {} atoms, {} bonds, bounds {:?}..{:?}",
                molecule.path().display(),
                molecule.atoms().len(),
                molecule.bonds().len(),
                b.min.to_array(),
                b.max.to_array(),
            ),
            None => log::info!(
                "{marker} [{i}] {}: empty structure",
                molecule.path().display(),
            ),
        }
    }
    log::info!("camera distance {:.3}", scene.camera().distance());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(arg) => PathBuf::from(arg),
        None => {
            log::error!("Usage: molviz <structure file or directory> [options.toml]");
            std::process::exit(1);
        }
    };

    let options = match args.next() {
        Some(preset) => match Options::load(Path::new(&preset)) {
            Ok(opts) => opts,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = run(&path, &options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
