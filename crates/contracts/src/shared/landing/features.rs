#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "file-text",
        title: "Document Analysis",
        description: "AI-powered analysis that highlights key clauses, risks, and opportunities in your legal documents.",
    },
    Feature {
        icon: "languages",
        title: "Plain Language Translation",
        description: "Convert complex legal jargon into clear, understandable language that anyone can comprehend.",
    },
    Feature {
        icon: "video",
        title: "AI Legal Consultation",
        description: "Get real-time explanations and advice through interactive video calls with our AI assistant.",
    },
    Feature {
        icon: "bar-chart",
        title: "Workflow Visualization",
        description: "Interactive flowcharts showing contract obligations, deadlines, and potential outcomes.",
    },
    Feature {
        icon: "brain",
        title: "Smart Insights",
        description: "Machine learning algorithms identify patterns and provide predictive analysis for better decisions.",
    },
    Feature {
        icon: "shield",
        title: "Secure & Compliant",
        description: "Enterprise-grade security with full compliance to legal industry standards and regulations.",
    },
];
