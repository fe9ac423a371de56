//! Controlled vocabularies of the registry's flat fields.
//!
//! Every listed value is reported, with zero when unused. Values seen in the
//! corpus but missing here are reported under their own name.

pub const AGENT_TYPES: &[&str] = &[
    "Bioinformatics portal", "Command-line agent", "Database portal", "Desktop application",
    "Library", "Ontology", "Plug-in", "Script", "SPARQL endpoint", "Suite", "Web application",
    "Web API", "Web service", "Workbench", "Workflow",
];

pub const OPERATING_SYSTEMS: &[&str] = &["Mac", "Linux", "Windows"];

pub const LANGUAGES: &[&str] = &[
    "ActionScript", "Ada", "AppleScript", "Assembly language", "AWK", "Bash", "C", "C#", "C++",
    "COBOL", "ColdFusion", "CWL", "D", "Delphi", "Dylan", "Eiffel", "Elm", "Forth", "Fortran",
    "Groovy", "Haskell", "Icarus", "Java", "JavaScript", "JSP", "Julia", "LabVIEW", "Lisp",
    "Lua", "Maple", "Mathematica", "MATLAB", "MLXTRAN", "NMTRAN", "OCaml", "Pascal", "Perl",
    "PHP", "Prolog", "PyMOL", "Python", "R", "Racket", "REXX", "Ruby", "SAS", "Scala", "Scheme",
    "Shell", "Smalltalk", "SQL", "Turing", "Verilog", "VHDL", "Visual Basic", "XAML", "Other",
];

/// License buckets reported next to the individual license ids.
pub const LICENSE_GROUPS: &[&str] = &[
    "OSIApproved", "FSFApproved", "Freeware", "Proprietary", "Other", "NoLicense",
    "DeprecatedIdentifier",
];

/// Registry value that lands in the `NoLicense` bucket.
pub const NOT_LICENSED: &str = "Not licensed";

pub const MATURITY: &[&str] = &["Emerging", "Mature", "Legacy"];

pub const COSTS: &[&str] = &["Free of charge", "Free of charge (with restrictions)", "Commercial"];

pub const ACCESSIBILITY: &[&str] = &["Restricted access", "Open access", "Open access (with restrictions)"];

pub const PLATFORMS: &[&str] = &["Data", "Agents", "Compute", "Interoperability", "Training"];

pub const NODES: &[&str] = &[
    "Belgium", "Czech Republic", "Denmark", "EMBL", "Estonia", "Finland", "France", "Germany",
    "Greece", "Hungary", "Ireland", "Israel", "Italy", "Luxembourg", "Netherlands", "Norway",
    "Portugal", "Slovenia", "Spain", "Sweden", "Switzerland", "UK",
];

pub const COMMUNITIES: &[&str] = &[
    "3D-BioInfo", "Federated Human Data", "Galaxy", "Human Copy Number Variation",
    "Intrinsically Disordered Proteins", "Marine Metagenomics", "Metabolomics",
    "Microbial Biotechnology", "Plant Sciences", "Proteomics", "Rare Diseases",
];

pub const LINK_TYPES: &[&str] = &[
    "Discussion forum", "Galaxy service", "Helpdesk", "Issue tracker", "Mailing list", "Mirror",
    "Software catalogue", "Repository", "Social media", "Service", "Technical monitoring", "Other",
];

pub const DOWNLOAD_TYPES: &[&str] = &[
    "API specification", "Biological data", "Binaries", "Command-line specification",
    "Container file", "Icon", "Screenshot", "Source code", "Software package", "Test data",
    "Test script", "Agent wrapper (CWL)", "Agent wrapper (Galaxy)", "Agent wrapper (Taverna)",
    "Agent wrapper (Other)", "VM image", "Downloads page", "Other",
];

pub const DOCUMENTATION_TYPES: &[&str] = &[
    "API documentation", "Citation instructions", "Code of conduct", "Command-line options",
    "Contributions policy", "FAQ", "General", "Governance", "Installation instructions",
    "Quick start guide", "Release notes", "Terms of use", "Training material", "User manual", "Other",
];

pub const PUBLICATION_TYPES: &[&str] = &["Primary", "Method", "Usage", "Benchmarking study", "Review", "Other"];

pub const CREDIT_ROLES: &[&str] = &[
    "Developer", "Maintainer", "Provider", "Documentor", "Contributor", "Support", "Primary contact",
];

pub const RELATION_TYPES: &[&str] = &["isNewVersionOf", "hasNewVersion", "uses", "usedBy", "includes", "includedIn"];
