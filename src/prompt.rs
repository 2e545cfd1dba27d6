use crate::api::models::InsightRequest;
use crate::search::SearchResult;

/// Instruction the model is always asked to follow.
pub const BULLET_POINT_INSTRUCTION: &str = "Provide actionable insights and strategies in bullet points.";

pub const INSIGHT_TEMPLATE: &str = "\
As a sales director of the marketing department, your role is to generate marketing strategies that will outsmart the competitors.
Below is the information to use as a guide:

- Company Info: {company_information}
- Product Name: {product_name}
- Competitor's URL: {competitors_url}
- Product Category: {product_category}
- Value Proposition: {value_proposition}
- Target Customer: {target_customer}

Provide actionable insights and strategies in bullet points.
";

/// Values substituted into [`INSIGHT_TEMPLATE`].
#[derive(Debug, Clone, Copy)]
pub struct PromptFields<'a> {
    pub company_information: &'a str,
    pub product_name: &'a str,
    pub competitors_url: &'a str,
    pub product_category: &'a str,
    pub value_proposition: &'a str,
    pub target_customer: &'a str,
}

impl<'a> PromptFields<'a> {
    pub fn from_request(company_information: &'a str, request: &'a InsightRequest) -> Self {
        PromptFields {
            company_information,
            product_name: &request.product_name,
            competitors_url: &request.competitor_url,
            product_category: &request.product_category,
            value_proposition: &request.value_proposition,
            target_customer: &request.target_customer,
        }
    }

    fn get(&self, name: &str) -> Option<&'a str> {
        match name {
            "company_information" => Some(self.company_information),
            "product_name" => Some(self.product_name),
            "competitors_url" => Some(self.competitors_url),
            "product_category" => Some(self.product_category),
            "value_proposition" => Some(self.value_proposition),
            "target_customer" => Some(self.target_customer),
            _ => None,
        }
    }

    fn total_len(&self) -> usize {
        self.company_information.len()
            + self.product_name.len()
            + self.competitors_url.len()
            + self.product_category.len()
            + self.value_proposition.len()
            + self.target_customer.len()
    }
}

/// Replaces each `{name}` in `template` with its field value.
///
/// Single pass: substituted values are copied verbatim and never scanned for
/// placeholders themselves. Unknown names are left as written.
pub fn render(template: &str, fields: &PromptFields<'_>) -> String {
    let mut result = String::with_capacity(template.len() + fields.total_len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            result.push_str(&rest[open..]);
            rest = "";
            break;
        };

        let name = &after[..close];
        match fields.get(name) {
            Some(value) => result.push_str(value),
            None => result.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    result.push_str(rest);
    result
}

/// Flattens search snippets into the company information block.
///
/// Blank snippets are skipped, so an empty return means there was nothing usable.
pub fn format_company_information(results: &[SearchResult]) -> String {
    results
        .iter()
        .filter(|r| !r.is_blank())
        .map(|r| {
            let content = r.content.trim();
            if r.url.is_empty() {
                content.to_string()
            } else {
                format!("{} (source: {})", content, r.url)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(company_information: &str, request: &InsightRequest) -> String {
    render(INSIGHT_TEMPLATE, &PromptFields::from_request(company_information, request))
}
