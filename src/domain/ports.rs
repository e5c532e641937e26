/// Sink for every line a lesson prints.
pub trait Console {
    fn line(&mut self, text: &str);
}

/// Capability set for anything that can be driven.
pub trait Vehicle {
    fn start(&self, console: &mut dyn Console);
    fn stop(&self, console: &mut dyn Console);
}

/// Capability to work. Types only need a name to get the default behavior.
pub trait Worker {
    fn name(&self) -> &str;

    fn work(&self, console: &mut dyn Console) {
        console.line(&format!("{} está trabajando", self.name()));
    }
}
