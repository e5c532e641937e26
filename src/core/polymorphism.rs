use crate::domain::ports::{Console, Vehicle, Worker};

/// Starts then stops any vehicle.
pub fn drive(console: &mut dyn Console, vehicle: &dyn Vehicle) {
    vehicle.start(console);
    vehicle.stop(console);
}

pub fn put_to_work(console: &mut dyn Console, worker: &dyn Worker) {
    tracing::debug!("{} is about to work", worker.name());
    worker.work(console);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::MemoryConsole;
    use crate::domain::model::{Car, Employee, Person};
    use std::cell::RefCell;

    struct RecordingVehicle {
        calls: RefCell<Vec<&'static str>>,
    }

    impl Vehicle for RecordingVehicle {
        fn start(&self, _console: &mut dyn Console) {
            self.calls.borrow_mut().push("start");
        }

        fn stop(&self, _console: &mut dyn Console) {
            self.calls.borrow_mut().push("stop");
        }
    }

    #[test]
    fn test_drive_calls_start_then_stop_once() {
        let vehicle = RecordingVehicle {
            calls: RefCell::new(Vec::new()),
        };
        let mut console = MemoryConsole::new();
        drive(&mut console, &vehicle);
        assert_eq!(*vehicle.calls.borrow(), vec!["start", "stop"]);
    }

    #[test]
    fn test_drive_car() {
        let mut console = MemoryConsole::new();
        drive(&mut console, &Car::new("Toyota"));
        assert_eq!(
            console.lines(),
            ["Toyota está arrancando", "Toyota está detenido"]
        );
    }

    #[test]
    fn test_put_to_work_dispatches_dynamically() {
        let workers: Vec<Box<dyn Worker>> = vec![
            Box::new(Person::new("Carlos", 30)),
            Box::new(Employee::new("Laura", 28, "Ingeniera")),
        ];
        let mut console = MemoryConsole::new();
        for worker in &workers {
            put_to_work(&mut console, &**worker);
        }
        assert_eq!(
            console.lines(),
            ["Carlos está trabajando", "Laura está trabajando como Ingeniera"]
        );
    }
}
