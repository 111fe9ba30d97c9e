//! Static glossary of terms shown on the Glossary page.

/// A glossary term and its definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub definition: &'static str,
}

const fn entry(term: &'static str, definition: &'static str) -> GlossaryEntry {
    GlossaryEntry { term, definition }
}

/// Glossary entries in display order.
pub const GLOSSARY: &[GlossaryEntry] = &[
    entry(
        "GO - Gene Ontology",
        "- a framework for the model of biology that describes gene functions in a species-independent manner.",
    ),
    entry(
        "KEGG - Kyoto Encyclopedia of Genes and Genomes",
        "- a database resource for understanding high-level functions and utilities of biological systems.",
    ),
    entry(
        "FPKM - Fragments Per Kilobase of transcript per Million mapped reads",
        "- a normalized method for counting RNA-seq reads.",
    ),
    entry(
        "miRNA - MicroRNA",
        "- small non-coding RNA molecules that regulate gene expression by binding to complementary sequences on target mRNA.",
    ),
    entry(
        "lncRNA - Long Non-Coding RNA",
        "- a type of RNA molecule that is greater than 200 nucleotides in length but does not encode proteins.",
    ),
    entry(
        "ST - Seed Tissue",
        "- the tissue in seeds that supports the development of the embryo and storage of nutrients.",
    ),
    entry(
        "FDS - Flower Development Stages",
        "- the various phases of growth and development that a flower undergoes from bud to bloom.",
    ),
    entry(
        "FP - Flower Parts",
        "- the various components that make up a flower, including petals, sepals, stamens, and carpels.",
    ),
    entry(
        "GT - Green Tissues",
        "- plant tissues that are photosynthetic, primarily found in leaves and stems.",
    ),
    entry(
        "RT - Root Tissues",
        "- the tissues found in the root system of a plant, involved in nutrient absorption and anchorage.",
    ),
    entry(
        "TF - Transcription Factor",
        "- a protein that controls the rate of transcription of genetic information from DNA to messenger RNA.",
    ),
    entry(
        "Non-TF - Non-Transcription Factors",
        "- proteins or molecules that do not directly bind to DNA to initiate or regulate transcription, but still influence gene expression through other mechanisms.",
    ),
    entry(
        "WGCNA - Weighted Gene Co-expression Network Analysis",
        "- a method for finding clusters (modules) of highly correlated genes and studying their relationships to clinical traits.",
    ),
    entry(
        "PPI - Protein-Protein Interaction",
        "- physical contacts between two or more proteins that occur in a living organism and are essential for various biological functions, including signal transduction and gene regulation.",
    ),
    entry(
        "SNP CALLING - Single Nucleotide Polymorphism",
        "The process of identifying single nucleotide polymorphisms (SNPs) in a genome from sequencing data. SNPs are variations at a single position in the DNA sequence, and SNP calling is crucial for genetic studies and disease association analyses.",
    ),
    entry(
        "PEPTIDE SEQUENCE",
        "A sequence of amino acids that make up a peptide, which is a short chain of amino acids linked by peptide bonds.",
    ),
    entry(
        "CDS SEQUENCE - Coding Sequence",
        "- the portion of a gene's DNA or RNA that codes for a protein.",
    ),
    entry(
        "TRANSCRIPT SEQUENCE",
        "The RNA sequence transcribed from a gene, which may be translated into a protein or may function as non-coding RNA.",
    ),
    entry(
        "GENOMIC SEQUENCE",
        "The complete sequence of nucleotides (DNA or RNA) that make up the entire genome of an organism.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_glossary_terms_unique_and_non_empty() {
        assert_eq!(GLOSSARY.len(), 19);

        let terms: HashSet<&str> = GLOSSARY.iter().map(|e| e.term).collect();
        assert_eq!(terms.len(), GLOSSARY.len());
        assert!(GLOSSARY.iter().all(|e| !e.definition.trim().is_empty()));
    }

    #[test]
    fn test_glossary_order() {
        assert_eq!(GLOSSARY[0].term, "GO - Gene Ontology");
        assert_eq!(GLOSSARY[GLOSSARY.len() - 1].term, "GENOMIC SEQUENCE");
    }
}
