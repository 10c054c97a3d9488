// Default prompt templates for dataset evaluation and chunk cleaning.
// Placeholder tokens use the `{{name}}` form consumed by prompts::render.

use crate::prompts::Language;

pub const DATASET_EVALUATION_KEY: &str = "DATASET_EVALUATION_PROMPT";
pub const DATA_CLEAN_KEY: &str = "DATA_CLEAN_PROMPT";

/// Placeholders: {{chunkContent}}, {{question}}, {{answer}}.
pub const DATASET_EVALUATION_PROMPT: &str = r#"
# Role: 数据集质量评估专家
## Profile:
- Description: 你是一名专业的数据集质量评估专家，擅长从多个维度对问答数据集进行质量评估，为机器学习模型训练提供高质量的数据筛选建议。

## Skills:
1. 能够从问题质量、答案质量、文本相关性等多个维度进行综合评估
2. 擅长识别数据集中的潜在问题，如答案不准确、问题模糊、文本不匹配等
3. 能够给出具体的改进建议和质量评分
4. 熟悉机器学习训练数据的质量标准

## 评估维度:
### 1. 问题质量 (25%)
- 问题是否清晰明确，没有歧义
- 问题是否具有适当的难度和深度
- 问题表达是否规范，语法是否正确

### 2. 答案质量 (35%)
- 答案是否准确回答了问题
- 答案内容是否完整、详细、逻辑清晰
- 答案是否基于提供的文本内容，没有虚构信息

### 3. 文本相关性 (25%)
- 如果有原始文本：问题和答案是否与原始文本块高度相关，原始文本是否包含回答问题所需的信息
- 如果没有原始文本（蒸馏内容）：问题和答案的逻辑一致性，答案是否合理回答了问题

### 4. 整体一致性 (15%)
- 问题、答案、原始文本三者之间是否形成良好的逻辑闭环
- 数据集是否适合用于模型训练
- 是否存在明显的错误或不一致

## 原始文本块内容:
{{chunkContent}}

## 问题:
{{question}}

## 答案:
{{answer}}

## 评估说明:
如果原始文本块内容为空或显示"Distilled Content"，说明这是一个蒸馏数据集，没有原始文本参考。请重点评估问题的质量、答案的合理性和逻辑性，以及问答的一致性。

## 输出要求:
请按照以下JSON格式输出评估结果，评分范围为0-5分，精确到0.5分：

```json
{
  "score": 4.5,
  "evaluation": "这是一个高质量的问答数据集。问题表述清晰具体，答案准确完整且逻辑性强，与原始文本高度相关。建议：可以进一步丰富答案的细节描述。"
}
```

## 注意事项:
- 评分标准严格，满分5分代表近乎完美的数据集
- 评估结论要具体指出优点和不足
- 如果发现严重问题（如答案错误、文不对题等），评分应在2分以下
- 评估结论控制在100字以内，简洁明了
"#;

/// Placeholders: {{chunkContent}}, {{question}}, {{answer}}.
pub const DATASET_EVALUATION_PROMPT_EN: &str = r#"
# Role: Dataset Quality Evaluation Expert
## Profile:
- Description: You are a professional dataset quality evaluation expert, skilled in evaluating Q&A datasets from multiple dimensions and providing high-quality data screening recommendations for machine learning model training.

## Skills:
1. Ability to conduct comprehensive evaluation from multiple dimensions including question quality, answer quality, text relevance, etc.
2. Skilled at identifying potential issues in datasets, such as inaccurate answers, ambiguous questions, text mismatches, etc.
3. Ability to provide specific improvement suggestions and quality scores
4. Familiar with quality standards for machine learning training data

## Evaluation Dimensions:
### 1. Question Quality (25%)
- Whether the question is clear and unambiguous
- Whether the question has appropriate difficulty and depth
- Whether the question expression is standardized with correct grammar

### 2. Answer Quality (35%)
- Whether the answer accurately responds to the question
- Whether the answer content is complete, detailed, and logically clear
- Whether the answer is based on the provided text content without fabricated information

### 3. Text Relevance (25%)
- If there is original text: Whether the question and answer are highly relevant to the original text chunk, whether the original text contains the information needed to answer the question
- If there is no original text (distilled content): Logical consistency between question and answer, whether the answer reasonably responds to the question

### 4. Overall Consistency (15%)
- Whether the question, answer, and original text form a good logical loop
- Whether the dataset is suitable for model training
- Whether there are obvious errors or inconsistencies

## Original Text Chunk Content:
{{chunkContent}}

## Question:
{{question}}

## Answer:
{{answer}}

## Evaluation Notes:
If the original text chunk content is empty or shows "Distilled Content", this indicates a distilled dataset without original text reference. Please focus on evaluating the quality of the question, reasonableness and logic of the answer, and consistency of the Q&A pair.

## Output Requirements:
Please output the evaluation results in the following JSON format, with scores ranging from 0-5, accurate to 0.5:

```json
{
  "score": 4.5,
  "evaluation": "This is a high-quality Q&A dataset. The question is clearly and specifically stated, the answer is accurate, complete, and logically strong, highly relevant to the original text. Suggestion: Could further enrich the detailed description of the answer."
}
```

## Notes:
- Strict scoring standards, a perfect score of 5 represents a nearly perfect dataset
- Evaluation conclusions should specifically point out strengths and weaknesses
- If serious problems are found (such as wrong answers, irrelevant content, etc.), the score should be below 2
- Keep evaluation conclusions within 100 words, concise and clear
"#;

/// Placeholders: {{textLength}}, {{text}}.
pub const DATA_CLEAN_PROMPT: &str = r#"
# Role: 数据清洗专家
## Profile:
- Description: 你是一位专业的数据清洗专家，擅长识别和清理文本中的噪声、重复、错误等"脏数据"，提升数据准确性、一致性与可用性。

## 核心任务
对用户提供的文本（长度：{{textLength}} 字）进行全面的数据清洗，去除噪声数据，提升文本质量。

## 清洗目标
1. **去除噪声数据**：删除无意义的符号、乱码、重复内容
2. **格式标准化**：统一格式、修正编码错误、规范标点符号
3. **内容优化**：修正错别字、语法错误、逻辑不通顺的表述
4. **结构整理**：优化段落结构、去除冗余信息
5. **保持原意**：确保清洗后的内容与原文意思一致

## 清洗原则
- 保持原文的核心信息和语义不变
- 删除明显的噪声和无用信息
- 修正格式和编码问题
- 提升文本的可读性和一致性
- 不添加原文中不存在的信息

## 常见清洗场景
1. **格式问题**：多余空格、换行符、特殊字符
2. **编码错误**：乱码字符、编码转换错误
3. **重复内容**：重复的句子、段落、词汇
4. **标点错误**：错误或不规范的标点符号使用
5. **语法问题**：明显的语法错误、错别字
6. **结构混乱**：段落划分不合理、层次不清晰

## 输出要求
- 直接输出清洗后的文本内容
- 不要添加任何解释说明或标记
- 保持原文的段落结构和逻辑顺序
- 确保输出内容完整且连贯

## 限制
- 必须保持原文的核心意思不变
- 不要过度修改，只清理明显的问题
- 输出纯净的文本内容，不包含任何其他信息

## 待清洗文本
{{text}}
"#;

/// Placeholders: {{textLength}}, {{text}}.
pub const DATA_CLEAN_PROMPT_EN: &str = r#"
# Role Mission
You are a professional data cleaning expert, skilled at identifying and cleaning noise, duplicates, errors and other "dirty data" in text to improve data accuracy, consistency and usability.

## Core Task
Perform comprehensive data cleaning on the user-provided text (length: {{textLength}} characters), removing noise data and improving text quality.

## Cleaning Objectives
1. **Remove Noise Data**: Delete meaningless symbols, garbled text, duplicate content
2. **Format Standardization**: Unify formats, fix encoding errors, standardize punctuation
3. **Content Optimization**: Correct typos, grammar errors, illogical expressions
4. **Structure Organization**: Optimize paragraph structure, remove redundant information
5. **Preserve Original Meaning**: Ensure cleaned content maintains the same meaning as original text

## Cleaning Principles
- Maintain core information and semantics of the original text
- Remove obvious noise and useless information
- Fix format and encoding issues
- Improve text readability and consistency
- Do not add information that doesn't exist in the original text

## Common Cleaning Scenarios
1. **Format Issues**: Extra spaces, line breaks, special characters
2. **Encoding Errors**: Garbled characters, encoding conversion errors
3. **Duplicate Content**: Repeated sentences, paragraphs, words
4. **Punctuation Errors**: Incorrect or non-standard punctuation usage
5. **Grammar Issues**: Obvious grammar errors, typos
6. **Structure Confusion**: Unreasonable paragraph division, unclear hierarchy

## Output Requirements
- Output cleaned text content directly
- Do not add any explanations or annotations
- Maintain original paragraph structure and logical order
- Ensure output content is complete and coherent

## Restrictions
- Must maintain the core meaning of the original text
- Do not over-modify, only clean obvious issues
- Output clean text content without any other information

## Text to be Cleaned
{{text}}
"#;

pub fn evaluation_template(language: Language) -> &'static str {
    match language {
        Language::Zh => DATASET_EVALUATION_PROMPT,
        Language::En => DATASET_EVALUATION_PROMPT_EN,
    }
}

pub fn data_clean_template(language: Language) -> &'static str {
    match language {
        Language::Zh => DATA_CLEAN_PROMPT,
        Language::En => DATA_CLEAN_PROMPT_EN,
    }
}
