use anyhow::Result;

mod texture_gen;

fn main() -> Result<()> {
    texture_gen::generate_texture()
}
