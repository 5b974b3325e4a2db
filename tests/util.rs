#![allow(dead_code)]
use monomial_slice::prelude::*;

pub fn t(exps: &[Exponent]) -> Term {
    Term::from_exponents(exps.to_vec())
}

pub fn ideal(var_count: usize, gens: &[&[Exponent]]) -> Ideal {
    Ideal::from_terms(var_count, gens.iter().map(|g| t(g)).collect()).unwrap()
}

/// Decomposes with one configuration, returning the sorted component labels.
pub fn decompose_with(config: &StrategyConfig, input: Ideal) -> Vec<Term> {
    let mut rec = TermRecorder::new(input.var_count());
    irreducible_decomposition(input, config, &mut rec, None).unwrap();
    rec.sorted_terms()
}

/// Every supported strategy configuration.
pub fn all_configs() -> Vec<StrategyConfig> {
    let mut configs = Vec::new();
    for split in ["label", "pivot"] {
        for pivot_select in ["median", "min", "max-support"] {
            for independence in ["on", "off"] {
                for simplify in ["on", "off"] {
                    for min_type in ["tight", "loose"] {
                        let mut config = StrategyConfig::new();
                        config.set("split", split).unwrap();
                        config.set("pivot-select", pivot_select).unwrap();
                        config.set("independence-split", independence).unwrap();
                        config.set("simplify", simplify).unwrap();
                        config.set("min-type", min_type).unwrap();
                        configs.push(config);
                    }
                }
            }
        }
    }
    configs
}

/// Brute-force irreducible decomposition by enumerating candidate maximal
/// standard monomials of the artinian closure below the lcm. Exponential;
/// for small oracle ideals only.
pub fn brute_force_components(input: &Ideal) -> Vec<Term> {
    let mut minimized = input.clone();
    minimized.minimize();
    let var_count = minimized.var_count();
    if minimized.contains_identity() {
        return if var_count == 0 { vec![Term::identity(0)] } else { Vec::new() };
    }
    if minimized.is_zero_ideal() {
        return Vec::new();
    }

    let lcm = minimized.lcm();
    // Artinian closure: x_v^{lcm_v + 1} wherever no pure power exists.
    let mut closure = minimized.clone();
    for var in 0..var_count {
        let power = Term::pure_power(var_count, var, lcm.exponent(var) + 1).unwrap();
        if !closure.contains(&power) {
            closure.insert(power).unwrap();
        }
    }

    let mut components = Vec::new();
    let mut candidate = vec![0u64; var_count];
    loop {
        let m = t(&candidate);
        if !closure.contains(&m) {
            let is_msm = (0..var_count).all(|var| {
                let mut bumped = m.clone();
                bumped.set_exponent(var, bumped.exponent(var) + 1);
                closure.contains(&bumped)
            });
            if is_msm {
                // Label: m_v + 1, with variables at the lcm mapped out.
                components.push(Term::from_exponents(
                    (0..var_count)
                        .map(|var| {
                            if m.exponent(var) == lcm.exponent(var) {
                                0
                            } else {
                                m.exponent(var) + 1
                            }
                        })
                        .collect(),
                ));
            }
        }
        // Odometer over [0, lcm_v] per variable.
        let mut var = 0;
        loop {
            if var == var_count {
                components.sort();
                return components;
            }
            candidate[var] += 1;
            if candidate[var] <= lcm.exponent(var) {
                break;
            }
            candidate[var] = 0;
            var += 1;
        }
    }
}
