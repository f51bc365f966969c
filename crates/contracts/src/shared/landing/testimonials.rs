#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    /// 1..=5
    pub rating: u8,
    pub quote: &'static str,
    pub featured: bool,
}

impl Testimonial {
    /// Avatar fallback: first letter of every name part
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// `(filled, empty)` star counts out of five
    pub fn stars(&self) -> (usize, usize) {
        let filled = usize::from(self.rating.min(5));
        (filled, 5 - filled)
    }
}

/// Headline figures shown above the testimonials, `(value, label)`
pub const TRUST_STATS: [(&str, &str); 4] = [
    ("99.9%", "Accuracy Rate"),
    ("10,000+", "Documents Analyzed"),
    ("500+", "Law Firms"),
    ("24/7", "Support"),
];

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Sarah Chen",
        role: "Corporate Lawyer",
        company: "TechLegal Partners",
        rating: 5,
        quote: "LegalAI has revolutionized how we handle contract reviews. What used to take hours now takes minutes, and the insights are incredibly accurate.",
        featured: true,
    },
    Testimonial {
        name: "Michael Rodriguez",
        role: "General Counsel",
        company: "StartupCorp",
        rating: 5,
        quote: "The plain language translation feature is a game-changer. Our clients finally understand their contracts without needing a law degree.",
        featured: false,
    },
    Testimonial {
        name: "Emily Watson",
        role: "Legal Operations Manager",
        company: "Enterprise Solutions",
        rating: 5,
        quote: "The AI consultation feature feels like having a senior partner available 24/7. It has significantly improved our response times.",
        featured: false,
    },
    Testimonial {
        name: "David Park",
        role: "Contract Specialist",
        company: "LegalTech Innovations",
        rating: 5,
        quote: "Workflow visualization helps us track deadlines and obligations effortlessly. Our compliance rate has improved by 40%.",
        featured: false,
    },
    Testimonial {
        name: "Lisa Thompson",
        role: "Legal Director",
        company: "Global Enterprises",
        rating: 5,
        quote: "Security was our biggest concern, but LegalAI exceeds all compliance requirements. We can trust it with our most sensitive documents.",
        featured: false,
    },
    Testimonial {
        name: "James Wilson",
        role: "Senior Associate",
        company: "Wilson & Associates",
        rating: 5,
        quote: "The document analysis catches risks we might have missed. It has become an essential part of our due diligence process.",
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_in_range() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
        assert_eq!(TESTIMONIALS.iter().filter(|t| t.featured).count(), 1);
    }

    #[test]
    fn test_initials_and_stars() {
        assert_eq!(TESTIMONIALS[1].initials(), "MR");
        let three = Testimonial {
            rating: 3,
            ..TESTIMONIALS[0]
        };
        assert_eq!(three.stars(), (3, 2));
    }
}
