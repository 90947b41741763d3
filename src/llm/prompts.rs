//! Prompt templates

/// Marker the query-writing prompt asks the model to put before the SQL
pub const SQL_QUERY_MARKER: &str = "SQLQuery: ";

/// Stop sequence that ends the model's output after the SQL statement
pub const SQL_RESULT_STOP: &str = "\nSQLResult:";

/// Build the SQLite query-writing prompt
///
/// The prompt ends right after the query marker, so a well-behaved model
/// answers with the bare statement.
pub fn sql_query(question: &str, table_info: &str, top_k: usize) -> String {
    format!(
        r#"You are a SQLite expert. Given an input question, first write a syntactically correct SQLite query to run, then look at the results of the query and return the answer to the input question.
Unless the question asks for a specific number of examples, query for at most {top_k} results using the LIMIT clause. You can order the results to return the most informative data in the database.
Never query for all columns from a table. Query only the columns needed to answer the question, and wrap each column name in double quotes (") so they are treated as delimited identifiers.
Only use column names that appear in the tables below, and keep track of which column belongs to which table.
If the question involves "today", use the date('now') function to get the current date.

Use the following format:

Question: Question here
SQLQuery: SQL Query to run
SQLResult: Result of the SQLQuery
Answer: Final answer here

Only use the following tables:
{table_info}

Question: {question}
{marker}"#,
        top_k = top_k,
        table_info = table_info,
        question = question,
        marker = SQL_QUERY_MARKER,
    )
}

/// Build the prompt that turns a query result into a readable answer
pub fn answer(question: &str, result: &str) -> String {
    format!(
        "You are given a SQL query and the result from the database.\n\
         Convert the result into a short and natural-sounding list format that answers the original question.\n\
         For each internship, include its name and clickable link (in Markdown style: [name](url)).\n\
         \n\
         Question: {}\n\
         SQL Result: {}\n\
         Answer:",
        question, result
    )
}
