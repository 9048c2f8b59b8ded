use anyhow::Result;
use clap::Args;
use di_uri::Triplet;

#[derive(Args)]
pub struct TripletArgs {
    /// Descriptor in cipher:key:iv form
    triplet: String,
}

pub fn run(args: &TripletArgs) -> Result<i32> {
    let triplet = Triplet::new(args.triplet.as_str());
    println!("cipher: {}", triplet.cipher());
    println!("key: {}", triplet.key());
    println!("iv: {}", triplet.iv());
    Ok(0)
}
