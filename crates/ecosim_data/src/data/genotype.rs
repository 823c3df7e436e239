use serde::{Deserialize, Serialize};

/// Shortest chromosome that still admits a crossover point in `[1, len - 2]`.
pub const MIN_GENES: usize = 3;

/// Fixed-length chromosome of real-valued genes in `[0, 1]`.
///
/// The length is fixed at construction; every constructor and the serde
/// path go through [`Genotype::from_genes`], so a `Genotype` value is always
/// at least [`MIN_GENES`] long with every gene finite and inside the unit
/// interval.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Genotype {
    genes: Vec<f64>,
}

impl Genotype {
    /// Builds a genotype from an explicit gene sequence, used verbatim.
    pub fn from_genes(genes: Vec<f64>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            genes.len() >= MIN_GENES,
            "Genotype needs at least {} genes, got {}",
            MIN_GENES,
            genes.len()
        );
        if let Some((idx, g)) = genes
            .iter()
            .enumerate()
            .find(|(_, g)| !g.is_finite() || !(0.0..=1.0).contains(*g))
        {
            anyhow::bail!("Gene {} out of range [0, 1]: {}", idx, g);
        }
        Ok(Self { genes })
    }

    #[must_use]
    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    #[must_use]
    pub fn gene(&self, index: usize) -> Option<f64> {
        self.genes.get(index).copied()
    }

    /// Mutable view of the genes. The slice cannot change the length.
    pub fn genes_mut(&mut self) -> &mut [f64] {
        &mut self.genes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Serialize genotype to hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        hex::encode(bytes)
    }

    /// Deserialize genotype from hex string.
    pub fn from_hex(hex_str: &str) -> anyhow::Result<Self> {
        let bytes = hex::decode(hex_str)?;
        let genotype = serde_json::from_slice(&bytes)?;
        Ok(genotype)
    }
}

impl TryFrom<Vec<f64>> for Genotype {
    type Error = anyhow::Error;

    fn try_from(genes: Vec<f64>) -> anyhow::Result<Self> {
        Self::from_genes(genes)
    }
}

impl From<Genotype> for Vec<f64> {
    fn from(genotype: Genotype) -> Self {
        genotype.genes
    }
}
