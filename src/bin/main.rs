use ownership_demos::{demos, DemoConfig, Journal};

fn main() {
    let journal = Journal::echoing();
    demos::run_all(&DemoConfig::default(), &journal);
}
