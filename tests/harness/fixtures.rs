//! Input documents and canned service responses.

pub(crate) const TEMPLATE: &str = r"\documentclass{article}
\begin{document}
\section{Experience}
\begin{itemize}
\item Built data pipelines in Python
\end{itemize}
\end{document}
";

pub(crate) const JOB_DESCRIPTION: &str =
    "Acme Co is hiring a Backend Developer to scale Python services on AWS.\n";

pub(crate) const TAILORED: &str = r"\documentclass{article}
\begin{document}
\section{Experience}
\begin{itemize}
\item Scaled Python services on AWS
\end{itemize}
\end{document}";

pub(crate) const MESSAGE: &str =
    "Subject: Backend Developer at Acme Co\n\nHi Dana,\n\nI would love to talk.\n\nSam";

/// Chat completions body whose first choice carries `content`.
pub(crate) fn completion(content: &str) -> String {
    serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    })
    .to_string()
}
