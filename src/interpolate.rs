use crate::bigint::BigInt;
use crate::error::{Result, ShamirError};
use crate::share::Point;

/// Recover the constant term of the degree-(k-1) polynomial through k of
/// the supplied points, evaluated at x = 0 by Lagrange interpolation.
///
/// Points are sorted by ascending x and the first k are used, so the result
/// is reproducible when more than k shares are supplied. Each Lagrange term
/// divides exactly when the shares are consistent; a non-zero remainder is
/// surfaced as [`ShamirError::InconsistentShares`] rather than truncated.
pub fn reconstruct(points: &[Point], k: usize) -> Result<BigInt> {
    if k == 0 {
        return Err(ShamirError::InvalidThreshold);
    }
    if points.len() < k {
        return Err(ShamirError::InsufficientShares {
            have: points.len(),
            need: k,
        });
    }

    let mut selected: Vec<&Point> = points.iter().collect();
    selected.sort_by_key(|point| point.x);
    selected.truncate(k);

    let mut secret = BigInt::zero();
    for i in 0..k {
        let (numerator, denominator) = basis_at_zero(&selected, i)?;

        let mut term = selected[i].y.mul_small(numerator);
        let mut divisor = denominator;
        if divisor < 0 {
            term = term.neg();
            divisor = divisor
                .checked_neg()
                .ok_or(ShamirError::CoefficientOverflow)?;
        }

        let (quotient, remainder) = term.div_small(divisor)?;
        if remainder != 0 {
            return Err(ShamirError::InconsistentShares { remainder, divisor });
        }
        secret = secret.add(&quotient);
    }
    Ok(secret)
}

// Lagrange basis value at x = 0 for the i-th selected point, as a
// (numerator, denominator) pair over native integers: prod(-x_j) over
// prod(x_i - x_j) for j != i. Overflow is reported, never wrapped.
fn basis_at_zero(selected: &[&Point], i: usize) -> Result<(i64, i64)> {
    let xi = selected[i].x;
    let mut numerator: i64 = 1;
    let mut denominator: i64 = 1;
    for (j, point) in selected.iter().enumerate() {
        if j == i {
            continue;
        }
        let difference = xi
            .checked_sub(point.x)
            .ok_or(ShamirError::CoefficientOverflow)?;
        if difference == 0 {
            return Err(ShamirError::DegenerateShareSet { x: xi });
        }
        numerator = point
            .x
            .checked_neg()
            .and_then(|negated| numerator.checked_mul(negated))
            .ok_or(ShamirError::CoefficientOverflow)?;
        denominator = denominator
            .checked_mul(difference)
            .ok_or(ShamirError::CoefficientOverflow)?;
    }
    Ok((numerator, denominator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radix;
    use rand::Rng;

    fn eval_poly(coefficients: &[i64], x: i64) -> BigInt {
        let mut acc = BigInt::zero();
        for &c in coefficients.iter().rev() {
            acc = acc.mul_small(x).add(&BigInt::from(c));
        }
        acc
    }

    fn points_on(coefficients: &[i64], xs: &[i64]) -> Vec<Point> {
        xs.iter()
            .map(|&x| Point {
                x,
                y: eval_poly(coefficients, x),
            })
            .collect()
    }

    #[test]
    fn recovers_quadratic_constant_term() {
        // p(x) = 2 + x + 2x^2 at x = 1, 2, 3
        let points = points_on(&[2, 1, 2], &[1, 2, 3]);
        assert_eq!(points[0].y, BigInt::from(5));
        assert_eq!(points[1].y, BigInt::from(12));
        assert_eq!(points[2].y, BigInt::from(23));
        assert_eq!(reconstruct(&points, 3).unwrap().to_string(), "2");
    }

    #[test]
    fn recovers_from_literal_points() {
        // (1,5), (2,8), (3,13) lie on x^2 + 4
        let points = vec![
            Point { x: 1, y: BigInt::from(5) },
            Point { x: 2, y: BigInt::from(8) },
            Point { x: 3, y: BigInt::from(13) },
        ];
        assert_eq!(reconstruct(&points, 3).unwrap().to_string(), "4");
    }

    #[test]
    fn single_share_threshold_returns_y() {
        let y = BigInt::from(-123)
            .mul_small(1_000_000_000)
            .sub(&BigInt::from(456));
        let points = vec![Point { x: 7, y: y.clone() }];
        assert_eq!(reconstruct(&points, 1).unwrap(), y);
    }

    #[test]
    fn extra_shares_do_not_change_the_result() {
        let coefficients = [41, -3, 7, 11];
        let points = points_on(&coefficients, &[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(reconstruct(&points, 4).unwrap().to_string(), "41");
        // a different k-subset agrees on the constant term
        assert_eq!(reconstruct(&points[3..], 4).unwrap().to_string(), "41");
    }

    #[test]
    fn random_polynomials_recover_their_constant_term() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let k = rng.gen_range(1..=8usize);
            let coefficients: Vec<i64> = (0..k)
                .map(|_| rng.gen_range(-1_000_000..=1_000_000))
                .collect();
            let xs: Vec<i64> = (1..=k as i64).collect();
            let points = points_on(&coefficients, &xs);
            assert_eq!(
                reconstruct(&points, k).unwrap(),
                BigInt::from(coefficients[0])
            );
        }
    }

    #[test]
    fn insufficient_shares_is_an_error() {
        let points = points_on(&[9, 1], &[1, 2]);
        assert!(matches!(
            reconstruct(&points, 3),
            Err(ShamirError::InsufficientShares { have: 2, need: 3 })
        ));
    }

    #[test]
    fn zero_threshold_is_an_error() {
        let points = points_on(&[9, 1], &[1, 2]);
        assert!(matches!(
            reconstruct(&points, 0),
            Err(ShamirError::InvalidThreshold)
        ));
    }

    #[test]
    fn duplicate_x_is_degenerate() {
        let points = vec![
            Point { x: 1, y: BigInt::from(4) },
            Point { x: 1, y: BigInt::from(9) },
            Point { x: 2, y: BigInt::from(6) },
        ];
        assert!(matches!(
            reconstruct(&points, 2),
            Err(ShamirError::DegenerateShareSet { x: 1 })
        ));
    }

    #[test]
    fn inconsistent_shares_surface_the_remainder() {
        // no integer quadratic passes through these three points
        let points = vec![
            Point { x: 1, y: BigInt::from(1) },
            Point { x: 2, y: BigInt::from(2) },
            Point { x: 4, y: BigInt::from(5) },
        ];
        assert!(matches!(
            reconstruct(&points, 3),
            Err(ShamirError::InconsistentShares { .. })
        ));
    }

    #[test]
    fn oversized_x_values_report_overflow() {
        let points = vec![
            Point { x: 4_000_000_000_000_000_000, y: BigInt::from(1) },
            Point { x: 3_000_000_000_000_000_000, y: BigInt::from(2) },
            Point { x: 2, y: BigInt::from(3) },
        ];
        assert!(matches!(
            reconstruct(&points, 3),
            Err(ShamirError::CoefficientOverflow)
        ));
    }

    #[test]
    fn large_share_values_reconstruct_exactly() {
        // 50-digit base-36 secret shared over a linear polynomial
        let secret = radix::decode(&"z".repeat(50), 36).unwrap();
        let slope = BigInt::from(987_654_321);
        let points = vec![
            Point { x: 1, y: secret.add(&slope) },
            Point { x: 2, y: secret.add(&slope.mul_small(2)) },
        ];
        assert_eq!(reconstruct(&points, 2).unwrap(), secret);
    }
}
