//! MNA matrix assembly and solving.

use crate::circuit::NetId;
use crate::error::{BreadboardError, Result};
use crate::netlist::{Element, Netlist};

use super::{DcSolution, DcSolver, MIN_CONDUCTANCE};

/// MNA matrix system Ax = z.
#[derive(Debug)]
struct MnaMatrix {
    /// System matrix A (row-major)
    a: Vec<f64>,
    /// Source vector z
    z: Vec<f64>,
    /// Solution vector x
    x: Vec<f64>,
    /// Matrix dimension
    size: usize,
    /// LU decomposition of A
    lu: Vec<f64>,
    /// Pivot indices for LU decomposition
    pivots: Vec<usize>,
}

impl MnaMatrix {
    fn new(size: usize) -> Self {
        Self {
            a: vec![0.0; size * size],
            z: vec![0.0; size],
            x: vec![0.0; size],
            size,
            lu: vec![0.0; size * size],
            pivots: vec![0; size],
        }
    }

    fn add(&mut self, row: usize, col: usize, value: f64) {
        self.a[row * self.size + col] += value;
    }

    /// Stamp a conductance between two nodes.
    /// For a conductance G between nodes n1 and n2:
    ///   A[n1,n1] += G
    ///   A[n2,n2] += G
    ///   A[n1,n2] -= G
    ///   A[n2,n1] -= G
    fn stamp_conductance(&mut self, n1: Option<usize>, n2: Option<usize>, g: f64) {
        if let Some(i) = n1 {
            self.add(i, i, g);
        }
        if let Some(j) = n2 {
            self.add(j, j, g);
        }
        if let (Some(i), Some(j)) = (n1, n2) {
            self.add(i, j, -g);
            self.add(j, i, -g);
        }
    }

    /// Stamp a voltage source between two nodes with branch current at
    /// index br. KVL equation: V[n+] - V[n-] = E
    fn stamp_voltage_source(
        &mut self,
        n_pos: Option<usize>,
        n_neg: Option<usize>,
        br: usize,
        voltage: f64,
    ) {
        if let Some(i) = n_pos {
            self.add(br, i, 1.0);
            self.add(i, br, 1.0);
        }
        if let Some(j) = n_neg {
            self.add(br, j, -1.0);
            self.add(j, br, -1.0);
        }
        self.z[br] = voltage;
    }

    /// Perform LU decomposition with partial pivoting.
    fn factor(&mut self) -> Result<()> {
        let n = self.size;
        self.lu.copy_from_slice(&self.a);

        for i in 0..n {
            self.pivots[i] = i;
        }

        for k in 0..n {
            // Find pivot
            let mut max_val = self.lu[k * n + k].abs();
            let mut max_row = k;

            for i in (k + 1)..n {
                let val = self.lu[i * n + k].abs();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_val < 1e-15 {
                return Err(BreadboardError::SingularMatrix);
            }

            // Swap rows if needed
            if max_row != k {
                self.pivots.swap(k, max_row);
                for j in 0..n {
                    self.lu.swap(k * n + j, max_row * n + j);
                }
            }

            // Eliminate
            let pivot = self.lu[k * n + k];
            for i in (k + 1)..n {
                let factor = self.lu[i * n + k] / pivot;
                self.lu[i * n + k] = factor;
                for j in (k + 1)..n {
                    self.lu[i * n + j] -= factor * self.lu[k * n + j];
                }
            }
        }

        Ok(())
    }

    /// Solve the system using the pre-computed LU decomposition.
    fn solve(&mut self) -> Result<()> {
        let n = self.size;

        // Apply pivot permutation to z
        let b = self.z.clone();
        for i in 0..n {
            self.x[i] = b[self.pivots[i]];
        }

        // Forward substitution (L * y = Pb)
        for i in 0..n {
            for j in 0..i {
                self.x[i] -= self.lu[i * n + j] * self.x[j];
            }
        }

        // Back substitution (U * x = y)
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                self.x[i] -= self.lu[i * n + j] * self.x[j];
            }
            let diag = self.lu[i * n + i];
            if diag.abs() < 1e-15 {
                return Err(BreadboardError::SingularMatrix);
            }
            self.x[i] /= diag;
        }

        Ok(())
    }
}

/// The built-in DC solver: dense MNA assembly and LU decomposition.
#[derive(Debug, Clone, Copy, Default)]
pub struct MnaSolver;

impl MnaSolver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Matrix column for a net voltage; ground has none.
    fn net_index(net: NetId) -> Option<usize> {
        if net.is_ground() {
            None
        } else {
            Some(net.0 - 1)
        }
    }
}

impl DcSolver for MnaSolver {
    fn solve(&self, netlist: &Netlist) -> Result<DcSolution> {
        let num_nets = netlist.net_count();
        let num_nodes = num_nets.saturating_sub(1);
        let num_branches = netlist.source_count();
        let size = num_nodes + num_branches;

        if size == 0 {
            return Ok(DcSolution::default());
        }

        let mut matrix = MnaMatrix::new(size);
        let mut sources = Vec::with_capacity(num_branches);

        for element in &netlist.elements {
            match element {
                Element::Resistor { a, b, ohms } => {
                    let g = 1.0 / ohms.max(1e-12);
                    matrix.stamp_conductance(Self::net_index(*a), Self::net_index(*b), g);
                }
                Element::VoltageSource {
                    source,
                    plus,
                    minus,
                    volts,
                } => {
                    let br = num_nodes + sources.len();
                    matrix.stamp_voltage_source(
                        Self::net_index(*plus),
                        Self::net_index(*minus),
                        br,
                        *volts,
                    );
                    sources.push(*source);
                }
            }
        }

        // Leak to ground so detached fragments stay solvable
        for i in 0..num_nodes {
            matrix.add(i, i, MIN_CONDUCTANCE);
        }

        matrix.factor()?;
        matrix.solve()?;

        let voltages = netlist
            .net_names
            .iter()
            .skip(1)
            .enumerate()
            .map(|(i, name)| (name.clone(), matrix.x[i]))
            .collect();

        let branch_currents = sources
            .iter()
            .enumerate()
            .map(|(s, id)| (*id, matrix.x[num_nodes + s]))
            .collect();

        Ok(DcSolution {
            voltages,
            branch_currents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::ComponentId;
    use approx::assert_relative_eq;

    fn names(n: usize) -> Vec<String> {
        (0..n)
            .map(|k| if k == 0 { "gnd".into() } else { format!("net{k}") })
            .collect()
    }

    #[test]
    fn test_single_loop_operating_point() {
        // gnd - [9V source] - net2 - [0.1 ohm] - net1 - [500 ohm] - gnd
        let netlist = Netlist {
            elements: vec![
                Element::VoltageSource {
                    source: ComponentId(0),
                    plus: NetId(2),
                    minus: NetId::GROUND,
                    volts: 9.0,
                },
                Element::Resistor {
                    a: NetId(1),
                    b: NetId(2),
                    ohms: 0.1,
                },
                Element::Resistor {
                    a: NetId(1),
                    b: NetId::GROUND,
                    ohms: 500.0,
                },
            ],
            net_names: names(3),
        };

        let solution = MnaSolver::new().solve(&netlist).unwrap();

        let i = 9.0 / 500.1;
        assert_relative_eq!(solution.voltage("net2"), 9.0, epsilon = 1e-9);
        assert_relative_eq!(solution.voltage("net1"), i * 500.0, epsilon = 1e-6);
        assert_relative_eq!(
            solution.branch_current(ComponentId(0)).unwrap().abs(),
            i,
            epsilon = 1e-9
        );
        assert_eq!(solution.voltage("gnd"), 0.0);
    }

    #[test]
    fn test_conflicting_parallel_ideal_sources_are_singular() {
        let netlist = Netlist {
            elements: vec![
                Element::VoltageSource {
                    source: ComponentId(0),
                    plus: NetId(1),
                    minus: NetId::GROUND,
                    volts: 9.0,
                },
                Element::VoltageSource {
                    source: ComponentId(1),
                    plus: NetId(1),
                    minus: NetId::GROUND,
                    volts: 5.0,
                },
            ],
            net_names: names(2),
        };

        assert!(matches!(
            MnaSolver::new().solve(&netlist),
            Err(BreadboardError::SingularMatrix)
        ));
    }

    #[test]
    fn test_detached_fragment_does_not_sink_the_solve() {
        // A powered loop plus a resistor floating between net3 and net4.
        let netlist = Netlist {
            elements: vec![
                Element::VoltageSource {
                    source: ComponentId(0),
                    plus: NetId(1),
                    minus: NetId::GROUND,
                    volts: 9.0,
                },
                Element::Resistor {
                    a: NetId(1),
                    b: NetId(2),
                    ohms: 0.1,
                },
                Element::Resistor {
                    a: NetId(2),
                    b: NetId::GROUND,
                    ohms: 500.0,
                },
                Element::Resistor {
                    a: NetId(3),
                    b: NetId(4),
                    ohms: 500.0,
                },
            ],
            net_names: names(5),
        };

        let solution = MnaSolver::new().solve(&netlist).unwrap();
        assert!(solution.voltage("net3").abs() < 1e-6);
        assert!(solution.voltage("net4").abs() < 1e-6);
        assert_relative_eq!(solution.voltage("net1"), 9.0, epsilon = 1e-6);
    }

    #[test]
    fn test_empty_netlist_solves_to_nothing() {
        let netlist = Netlist {
            elements: vec![],
            net_names: names(1),
        };
        let solution = MnaSolver::new().solve(&netlist).unwrap();
        assert!(solution.voltages.is_empty());
        assert!(solution.branch_currents.is_empty());
    }
}
