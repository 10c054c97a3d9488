// Default prompt templates for question generation: chunk-based generation
// with an optional genre/audience sub-prompt, and tag-based distillation.

use crate::prompts::Language;

pub const QUESTION_KEY: &str = "QUESTION_PROMPT";
pub const GA_QUESTION_KEY: &str = "GA_QUESTION_PROMPT";
pub const DISTILL_QUESTIONS_KEY: &str = "DISTILL_QUESTIONS_PROMPT";

/// Placeholders: {{textLength}}, {{number}}, {{gaPrompt}}, {{gaPromptNote}},
/// {{gaPromptCheck}}, {{text}}.
pub const QUESTION_PROMPT: &str = r#"
# 角色使命
你是一位专业的文本分析专家，擅长从复杂文本中提取关键信息并生成可用于模型微调的结构化数据（仅生成问题）。

## 核心任务
根据用户提供的文本（长度：{{textLength}} 字），生成不少于 {{number}} 个高质量问题。

## 约束条件（重要！！！）
- 必须基于文本内容直接生成
- 问题应具有明确答案指向性
- 需覆盖文本的不同方面
- 禁止生成假设性、重复或相似问题

{{gaPrompt}}

## 处理流程
1. 【文本解析】分段处理内容，识别关键实体和核心概念
2. 【问题生成】基于信息密度选择最佳提问点{{gaPromptNote}}
3. 【质量检查】确保：
   - 问题答案可在原文中找到依据
   - 标签与问题内容强相关
   - 无格式错误
   {{gaPromptCheck}}

## 输出格式
- JSON 数组格式必须正确
- 字段名使用英文双引号
- 输出的 JSON 数组必须严格符合以下结构：
```json
["问题1", "问题2", "..."]
```

## 输出示例
```json
[ "人工智能伦理框架应包含哪些核心要素？","民法典对个人数据保护有哪些新规定？"]
```

## 待处理文本
{{text}}

## 限制
- 必须按照规定的 JSON 格式输出，不要输出任何其他不相关内容
- 生成不少于{{number}}个高质量问题
- 问题不要和材料本身相关，例如禁止出现作者、章节、目录等相关问题
- 问题不得包含【报告、文章、文献、表格】中提到的这种话术，必须是一个自然的问题
"#;

/// Placeholders: {{textLength}}, {{number}}, {{gaPrompt}}, {{gaPromptNote}},
/// {{gaPromptCheck}}, {{text}}.
pub const QUESTION_PROMPT_EN: &str = r#"
# Role Mission
You are a professional text analysis expert, skilled at extracting key information from complex texts and generating structured data(only generate questions) that can be used for model fine-tuning.

## Core Task
Based on the text provided by the user(length: {{textLength}} characters), generate no less than {{number}} high-quality questions.

## Constraints(Important!!!)
✔️ Must be directly generated based on the text content.
✔️ Questions should have a clear answer orientation.
✔️ Should cover different aspects of the text.
❌ It is prohibited to generate hypothetical, repetitive, or similar questions.

{{gaPrompt}}

## Processing Flow
1. 【Text Parsing】Process the content in segments, identify key entities and core concepts.
2. 【Question Generation】Select the best questioning points based on the information density{{gaPromptNote}}
3. 【Quality Check】Ensure that:
   - The answers to the questions can be found in the original text.
   - The labels are strongly related to the question content.
   - There are no formatting errors.
   {{gaPromptCheck}}

## Output Format
- The JSON array format must be correct.
- Use English double-quotes for field names.
- The output JSON array must strictly follow the following structure:
```json
["Question 1", "Question 2", "..."]
```

## Output Example
```json
[ "What core elements should an AI ethics framework include?", "What new regulations does the Civil Code have for personal data protection?"]
```

## Text to be Processed
{{text}}

## Restrictions
- Must output in the specified JSON format and do not output any other irrelevant content.
- Generate no less than {{number}} high-quality questions.
- Questions should not be related to the material itself. For example, questions related to the author, chapters, table of contents, etc. are prohibited.
- Questions must not contain phrases like "in the report/article/literature/table" and must be natural questions.
"#;

/// Placeholders: {{genre}}, {{audience}}.
pub const GA_QUESTION_PROMPT: &str = r#"
## 特殊要求-体裁与受众视角提问：
请根据以下体裁与受众组合，调整你的提问角度和问题风格：

**目标体裁**: {{genre}}
**目标受众**: {{audience}}

请确保：
1. 问题应完全符合「{{genre}}」所定义的风格、焦点和深度等等属性。
2. 问题应考虑到「{{audience}}」的知识水平、认知特点和潜在兴趣点。
3. 从该受众群体的视角和需求出发提出问题
4. 保持问题的针对性和实用性，确保问题-答案的风格一致性
5. 问题应具有一定的清晰度和具体性，避免过于宽泛或模糊。
"#;

/// Placeholders: {{genre}}, {{audience}}.
pub const GA_QUESTION_PROMPT_EN: &str = r#"
## Special Requirements - Genre & Audience Perspective Questioning:
Adjust your questioning approach and question style based on the following genre and audience combination:

**Target Genre**: {{genre}}
**Target Audience**: {{audience}}

Please ensure:
1. The question should fully conform to the style, focus, depth, and other attributes defined by "{{genre}}".
2. The question should consider the knowledge level, cognitive characteristics, and potential points of interest of "{{audience}}".
3. Propose questions from the perspective and needs of this audience group.
4. Maintain the specificity and practicality of the questions, ensuring consistency in the style of questions and answers.
5. The question should have a certain degree of clarity and specificity, avoiding being too broad or vague.
"#;

/// Placeholders: {{currentTag}}, {{count}}, {{tagPath}}, {{existingQuestions}}.
pub const DISTILL_QUESTIONS_PROMPT: &str = r#"
你是一个专业的知识问题生成助手，精通{{currentTag}}领域的知识。我需要你帮我为标签"{{currentTag}}"生成{{count}}个高质量、多样化的问题。

标签完整链路是：{{tagPath}}

请遵循以下规则：
1. 生成的问题必须与"{{currentTag}}"主题紧密相关，确保全面覆盖该主题的核心知识点和关键概念
2. 问题应该均衡分布在以下难度级别(每个级别至少占20%):
   - 基础级：适合入门者，关注基本概念、定义和简单应用
   - 中级：需要一定领域知识，涉及原理解释、案例分析和应用场景
   - 高级：需要深度思考，包括前沿发展、跨领域联系、复杂问题解决方案等

3. 问题类型应多样化，包括但不限于（以下只是参考，可以根据实际情况灵活调整，不一定要限定下面的主题）：
   - 概念解释类："什么是..."、"如何定义..."
   - 原理分析类："为什么..."、"如何解释..."
   - 比较对比类："...与...有何区别"、"...相比...的优势是什么"
   - 应用实践类："如何应用...解决..."、"...的最佳实践是什么"
   - 发展趋势类："...的未来发展方向是什么"、"...面临的挑战有哪些"
   - 案例分析类："请分析...案例中的..."
   - 启发思考类："如果...会怎样"、"如何评价..."

4. 问题表述要清晰、准确、专业，避免以下问题：
   - 避免模糊或过于宽泛的表述
   - 避免可以简单用"是/否"回答的封闭性问题
   - 避免包含误导性假设的问题
   - 避免重复或高度相似的问题

5. 问题的深度和广度要适当（以下只是参考，可以根据实际情况灵活调整，不一定要限定下面的主题）：
   - 覆盖主题的历史、现状、理论基础和实际应用
   - 包含该领域的主流观点和争议话题
   - 考虑该主题与相关领域的交叉关联
   - 关注该领域的新兴技术、方法或趋势

{{existingQuestions}}

请直接以JSON数组格式返回问题，不要有任何额外的解释或说明，格式如下：

["问题1", "问题2", "问题3", ...]

注意：每个问题应该是完整的、自包含的，无需依赖其他上下文即可理解和回答。
"#;

/// Placeholders: {{currentTag}}, {{count}}, {{tagPath}}, {{existingQuestions}}.
pub const DISTILL_QUESTIONS_PROMPT_EN: &str = r#"
You are a professional knowledge question generation assistant, proficient in the field of {{currentTag}}. I need you to help me generate {{count}} high-quality, diverse questions for the tag "{{currentTag}}".
The complete tag path is: {{tagPath}}

Please follow these rules:
1. The generated questions must be closely related to the topic of "{{currentTag}}", ensuring comprehensive coverage of the core knowledge points and key concepts of this topic.
2. Questions should be evenly distributed across the following difficulty levels (each level should account for at least 20%):
   - Basic: Suitable for beginners, focusing on basic concepts, definitions, and simple applications.
   - Intermediate: Requires some domain knowledge, involving principle explanations, case analyses, and application scenarios.
   - Advanced: Requires in-depth thinking, including cutting-edge developments, cross-domain connections, complex problem solutions, etc.

3. Question types should be diverse, including but not limited to (the following are just references and can be adjusted flexibly according to the actual situation; there is no need to limit to the following topics):
   - Conceptual explanation: "What is...", "How to define..."
   - Principle analysis: "Why...", "How to explain..."
   - Comparison and contrast: "What is the difference between... and...", "What are the advantages of... compared to..."
   - Application practice: "How to apply... to solve...", "What is the best practice for..."
   - Development trends: "What is the future development direction of...", "What challenges does... face?"
   - Case analysis: "Please analyze... in the case of..."
   - Thought-provoking: "What would happen if...", "How to evaluate..."

4. Question phrasing should be clear, accurate, and professional. Avoid the following:
   - Avoid vague or overly broad phrasing.
   - Avoid closed-ended questions that can be answered with "yes/no".
   - Avoid questions containing misleading assumptions.
   - Avoid repetitive or highly similar questions.

5. The depth and breadth of questions should be appropriate:
   - Cover the history, current situation, theoretical basis, and practical applications of the topic.
   - Include mainstream views and controversial topics in the field.
   - Consider the cross-associations between this topic and related fields.
   - Focus on emerging technologies, methods, or trends in this field.

{{existingQuestions}}

Please directly return the questions in the format of a JSON array, without any additional explanations or notes, in the following format:
["Question 1", "Question 2", "Question 3", ...]

Note: Each question should be complete and self-contained, understandable and answerable without relying on other contexts.
"#;

pub fn question_template(language: Language) -> &'static str {
    match language {
        Language::Zh => QUESTION_PROMPT,
        Language::En => QUESTION_PROMPT_EN,
    }
}

pub fn ga_question_template(language: Language) -> &'static str {
    match language {
        Language::Zh => GA_QUESTION_PROMPT,
        Language::En => GA_QUESTION_PROMPT_EN,
    }
}

pub fn distill_questions_template(language: Language) -> &'static str {
    match language {
        Language::Zh => DISTILL_QUESTIONS_PROMPT,
        Language::En => DISTILL_QUESTIONS_PROMPT_EN,
    }
}
