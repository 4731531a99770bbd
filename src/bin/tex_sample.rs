use blocksmith::core::texture::Texture;
use blocksmith::math::constants::Vector2f;
use blocksmith::textures::image::ImageTexture;
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: {} <texture.exr/png/jpg> <u> <v>", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];
    let (u, v) = match (args[2].parse::<f32>(), args[3].parse::<f32>()) {
        (Ok(u), Ok(v)) => (u, v),
        _ => {
            eprintln!("u and v must be numbers, got {} {}", args[2], args[3]);
            std::process::exit(1);
        }
    };

    let tex = match ImageTexture::from_file(path) {
        Ok(tex) => tex,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let c = tex.eval(Vector2f::new(u, v));
    let c_flipped = tex.eval(Vector2f::new(u, 1.0 - v));

    println!("texture: {} ({})", path, tex.describe());
    println!("uv = ({:.6}, {:.6})", u, v);
    println!("texel at (u, v):     R {:.6}, G {:.6}, B {:.6}, A {:.6}", c[0], c[1], c[2], c[3]);
    println!("texel at (u, 1 - v): R {:.6}, G {:.6}, B {:.6}, A {:.6}",
             c_flipped[0], c_flipped[1], c_flipped[2], c_flipped[3]);
}
