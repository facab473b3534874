use playground::scene::{Animator, Scene};
use std::error::Error;

pub fn execute(frames: u64, width: f64, height: f64) -> Result<(), Box<dyn Error>> {
    let mut animator = Animator::new(Scene::robot(width, height));
    animator.advance(frames);

    println!("{}", serde_json::to_string_pretty(animator.scene())?);
    Ok(())
}
