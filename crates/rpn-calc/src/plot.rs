//! Sampling the stack as a function of one variable.

use crate::calculator::Calculator;
use crate::error::CalcError;

/// One sample of the plotted function. `y` is `None` where the stack has
/// no value, e.g. outside the domain of `√`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: Option<f64>,
}

/// Evaluates the stack once per `x`, with `variable` bound to it.
///
/// The binding `variable` had before the call is left as it was.
pub fn sample<I>(calc: &mut Calculator, variable: &str, xs: I) -> Result<Vec<Point>, CalcError>
where
    I: IntoIterator<Item = f64>,
{
    let mut points = Vec::new();
    for x in xs {
        let y = calc.evaluate_with(variable, x)?;
        points.push(Point { x, y });
    }
    Ok(points)
}

/// `count` evenly spaced values from `from` to `to`, both ends included.
pub fn linspace(from: f64, to: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![from],
        _ => {
            let step = (to - from) / (count - 1) as f64;
            (0..count).map(|i| from + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_ends() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn empty_variable_name_is_rejected() {
        let mut calc = Calculator::new();
        calc.push_operand(1.0);
        assert!(matches!(
            sample(&mut calc, "", [1.0]),
            Err(CalcError::InvalidVarname)
        ));
    }
}
