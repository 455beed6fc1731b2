use std::sync::Arc;
use std::thread;

use bazi_core::{BirthInput, ChartCalculator, Gender, TABLES};

fn inputs() -> Vec<BirthInput> {
    vec![
        BirthInput::new(Gender::Male, "1990-01-01", "08:00", "Beijing"),
        BirthInput::new(Gender::Female, "1985-06-15", "14:30", "Chengdu"),
        BirthInput::new(Gender::Female, "2017-07-23", "23:15", "Guangzhou"),
        BirthInput::new(Gender::Male, "2000-02-04", "00:30", "Shanghai"),
        BirthInput::new(Gender::Male, "2100-06-15", "12:00", "Harbin"),
    ]
}

#[test]
fn repeated_calculation_is_byte_identical() {
    let calculator = ChartCalculator::default();
    for input in inputs() {
        let first = calculator.calculate(&input).unwrap().to_json().unwrap();
        let second = calculator.calculate(&input).unwrap().to_json().unwrap();
        assert_eq!(first, second);

        let fresh = ChartCalculator::default()
            .calculate(&input)
            .unwrap()
            .to_json()
            .unwrap();
        assert_eq!(first, fresh);
    }
}

#[test]
fn concurrent_calculation_agrees() {
    let calculator = Arc::new(ChartCalculator::default());
    let expected: Vec<String> = inputs()
        .iter()
        .map(|i| calculator.calculate(i).unwrap().to_json().unwrap())
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let calculator = Arc::clone(&calculator);
            thread::spawn(move || {
                inputs()
                    .iter()
                    .map(|i| calculator.calculate(i).unwrap().to_json().unwrap())
                    .collect::<Vec<String>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn fingerprint_is_stable() {
    assert_eq!(TABLES.fingerprint(), TABLES.fingerprint());
}
