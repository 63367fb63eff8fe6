mod command;
mod sink;

fn main() -> anyhow::Result<()> {
    command::run()
}
