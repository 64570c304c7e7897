use anyhow::Result;

fn main() -> Result<()> {
    driftcraft::launcher::run()
}
