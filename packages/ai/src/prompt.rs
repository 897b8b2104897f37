// ABOUTME: Summarization prompt sent to the text generator for each README
// ABOUTME: Asks for a JSON object with text, deployedUrl and techStack keys

/// Build the fixed summarization instruction with `readme` embedded
pub fn build_summary_prompt(readme: &str) -> String {
    format!(
        r#"
You are an assistant summarizing README files for a portfolio site. Given the README content, return:

1. A 2–3 sentence summary.
2. A deployed URL if mentioned.
3. A tech stack (list of technologies, languages, or frameworks mentioned).

README:
"""{readme}"""

Respond in this JSON format:
{{
  "text": "...summary...",
  "deployedUrl": "...url or null...",
  "techStack": ["tech1", "tech2", ...]
}}
"#
    )
}
