
use game_of_life::{
    app::App,
    draw::Terminal,
};

use rand::{ rngs::StdRng, SeedableRng };

fn main() -> Result<(), Box<dyn std::error::Error>>{
    let mut a = App::new(Terminal::new(), StdRng::from_entropy());
    a.run()?;
    Ok(())
}
